//! Identification pipeline.
//!
//! Extraction, classification, normalization, optional enrichment and
//! reconciliation, in that order, once per file. When nothing sensible is
//! found the pipeline retries exactly once with the parent directory name.

use crate::core::patterns::PatternTable;
use crate::core::{classifier, enrichment, extractor, normalizer};
use crate::models::config::IdentifyOptions;
use crate::models::media::{Classification, MediaKind, ParsedFile};
use crate::services::provider::MetadataProvider;
use std::sync::Arc;

/// Identifies files, optionally enriching them through a provider.
#[derive(Clone)]
pub struct Identifier {
    table: Arc<PatternTable>,
    provider: Option<Arc<dyn MetadataProvider>>,
}

impl Identifier {
    /// Identifier without metadata lookups.
    pub fn new() -> Self {
        Self {
            table: PatternTable::shared(),
            provider: None,
        }
    }

    /// Identifier that looks names up through `provider` when asked to.
    pub fn with_provider(provider: Arc<dyn MetadataProvider>) -> Self {
        Self {
            table: PatternTable::shared(),
            provider: Some(provider),
        }
    }

    /// Use a different rule table.
    pub fn with_table(mut self, table: Arc<PatternTable>) -> Self {
        self.table = table;
        self
    }

    /// Identify a file from its path without any network access.
    pub fn parse(&self, path: &str, options: &IdentifyOptions) -> ParsedFile {
        let mut file = self.parse_local(path, options);
        if file.media_kind() == MediaKind::Video {
            if file.has_year_as_season {
                warn_unreconciled(&file);
            }
            finish(&mut file);
        }
        file
    }

    /// Identify a file, consulting the provider when `options.lookup` is set.
    pub async fn identify(&self, path: &str, options: &IdentifyOptions) -> ParsedFile {
        let mut file = self.parse_local(path, options);
        if file.media_kind() != MediaKind::Video {
            return file;
        }

        match (&self.provider, options.lookup) {
            (Some(provider), true) => {
                enrichment::enrich(&mut file, provider.as_ref()).await;
                enrichment::reconcile_year_as_season(&mut file, provider.as_ref()).await;
            }
            (None, true) => {
                tracing::warn!("Lookup requested but no metadata provider is configured");
                if file.has_year_as_season {
                    warn_unreconciled(&file);
                }
            }
            (_, false) => {
                if file.has_year_as_season {
                    warn_unreconciled(&file);
                }
            }
        }

        finish(&mut file);
        file
    }

    /// Extraction, classification and normalization, with the parent retry.
    fn parse_local(&self, path: &str, options: &IdentifyOptions) -> ParsedFile {
        tracing::debug!("Parsing '{}' with options {:?}", path, options);

        let (file, classification) = self.attempt(path, options, options.original_file.clone());

        let file = match classification {
            Some(Classification::Unresolved) if file.original_file.is_none() => {
                match classifier::parent_retry_path(path, &file.extension) {
                    Some(retry_path) => {
                        tracing::warn!(
                            "Nothing sensible found in '{}', trying again with parent '{}'",
                            file.filename,
                            retry_path
                        );
                        // The second attempt carries the original path and is never retried.
                        let (retried, _) = self.attempt(&retry_path, options, Some(path.to_string()));
                        retried
                    }
                    None => {
                        tracing::warn!("Nothing sensible found in '{}', leaving it unclassified", file.filename);
                        file
                    }
                }
            }
            Some(Classification::Unresolved) => {
                tracing::warn!("Nothing sensible found in '{}', leaving it unclassified", file.filename);
                file
            }
            _ => file,
        };

        self.normalize(file)
    }

    /// One extraction and classification pass. Returns `None` as the
    /// classification for files that are not video.
    fn attempt(
        &self,
        path: &str,
        options: &IdentifyOptions,
        original_file: Option<String>,
    ) -> (ParsedFile, Option<Classification>) {
        let mut file = ParsedFile::from_path(path, options, original_file);
        tracing::debug!("Checking file '{}'", file.filename);

        if file.media_kind() != MediaKind::Video {
            if file.media_kind() == MediaKind::Music {
                tracing::debug!("'{}' is a music file, not identifying it", file.full_name());
            }
            return (file, None);
        }

        extractor::extract(&mut file, &self.table);
        tracing::debug!(
            "Pre-parsing of '{}' done, year: '{}', season: '{}', episode: '{}'",
            file.filename,
            file.year,
            file.season,
            file.episode
        );

        let classification = classifier::classify(&file, options);
        classifier::apply(&mut file, classification);
        (file, Some(classification))
    }

    fn normalize(&self, mut file: ParsedFile) -> ParsedFile {
        if file.media_kind() == MediaKind::Video {
            file.clean_name = normalizer::clean_name(&file, &self.table);
        }
        file
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_unreconciled(file: &ParsedFile) {
    tracing::warn!(
        "'{}' has a year as season but lookup is disabled, keeping season '{}'",
        file.filename,
        file.season
    );
}

/// Disambiguation and the final colon strip.
fn finish(file: &mut ParsedFile) {
    if let Some(name) = normalizer::disambiguate(&file.clean_name, &file.year) {
        tracing::debug!(
            "'{}' exists as several series, adding the year to the name",
            file.clean_name
        );
        file.clean_name = name;
    }

    // Enrichment may have brought colons back.
    file.clean_name = normalizer::strip_colons(&file.clean_name);

    tracing::info!("Done parsing filename. {}", file);
}

/// Identify a file with the standard rules and no lookups.
pub fn parse_file(path: &str, options: &IdentifyOptions) -> ParsedFile {
    Identifier::new().parse(path, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_left_alone() {
        let file = parse_file("notes.txt", &IdentifyOptions::default());
        assert_eq!(file.filename, "notes");
        assert!(!file.is_movie && !file.is_series);
        assert!(file.clean_name.is_empty());
    }

    #[test]
    fn test_music_is_detected_but_not_identified() {
        let file = parse_file("Artist - Song 2019.flac", &IdentifyOptions::default());
        assert_eq!(file.media_kind(), MediaKind::Music);
        assert!(file.year.is_empty());
        assert!(!file.is_movie);
    }

    #[test]
    fn test_carried_original_file_disables_retry() {
        let options = IdentifyOptions {
            original_file: Some("/already/retried.mkv".to_string()),
            ..Default::default()
        };
        let file = parse_file("/home/Show.S01E01/abc.mkv", &options);
        assert!(!file.is_series);
        assert_eq!(file.source_path(), "/already/retried.mkv");
    }

    #[test]
    fn test_retry_happens_at_most_once() {
        // Neither the file nor its parent carry a signal.
        let file = parse_file("/a/b/nothing/here.mkv", &IdentifyOptions::default());
        assert_eq!(file.filepath, "nothing.mkv");
        assert_eq!(file.source_path(), "/a/b/nothing/here.mkv");
        assert!(!file.is_movie && !file.is_series);
        assert_eq!(file.clean_name, "Nothing");
    }
}
