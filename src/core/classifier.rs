//! Movie / series classification.

use crate::models::config::IdentifyOptions;
use crate::models::media::{Classification, ParsedFile};
use std::path::Path;

/// Decide what the extracted fields describe.
///
/// Forced classifications win over signals; a movie needs a year and no
/// season/episode, a series needs both season and episode.
pub fn classify(file: &ParsedFile, options: &IdentifyOptions) -> Classification {
    if options.force_movie
        || (file.episode.is_empty() && file.season.is_empty() && !file.year.is_empty())
    {
        Classification::Movie
    } else if options.force_series || (!file.episode.is_empty() && !file.season.is_empty()) {
        Classification::Series
    } else {
        Classification::Unresolved
    }
}

/// Store a classification on the file.
pub fn apply(file: &mut ParsedFile, classification: Classification) {
    file.is_movie = classification == Classification::Movie;
    file.is_series = classification == Classification::Series;
    match classification {
        Classification::Movie => tracing::debug!("Identified '{}' as a movie", file.filename),
        Classification::Series => tracing::debug!("Identified '{}' as an episode", file.filename),
        Classification::Unresolved => {}
    }
}

/// Synthetic path used to retry classification with the parent directory name.
///
/// Returns `None` when there is no usable parent, i.e. the path has no
/// directory component or the parent is `.`.
pub fn parent_retry_path(path: &str, extension: &str) -> Option<String> {
    let parent = Path::new(path).parent()?;
    let name = parent.file_name()?.to_string_lossy();
    if name.is_empty() || name == "." {
        return None;
    }
    Some(format!("{}{}", name, extension))
}
