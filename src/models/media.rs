//! Media-related data models.

use crate::models::config::IdentifyOptions;
use crate::utils::fs::{is_music_extension, is_video_extension};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What kind of file an extension points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    /// Detected but not identified any further.
    Music,
    Other,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Music => write!(f, "music"),
            MediaKind::Other => write!(f, "other"),
        }
    }
}

/// Outcome of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Movie,
    Series,
    Unresolved,
}

/// Everything learned about one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    /// Path as given (or the synthetic parent-derived path after a retry).
    pub filepath: String,
    /// The real file when classification went through the parent directory.
    pub original_file: Option<String>,
    /// Base name without extension.
    pub filename: String,
    /// Extension including the leading dot, or empty.
    pub extension: String,
    pub year: String,
    /// Two-digit season, or empty.
    pub season: String,
    /// Two-digit episode, or empty.
    pub episode: String,
    pub resolution: String,
    pub quality: String,
    /// Verbatim trailing block of technical tags.
    pub technical_info: String,
    /// Bracketed release group at the start of anime filenames.
    pub anime_group: String,
    /// Display title.
    pub clean_name: String,
    pub external_id: u64,
    pub external_name: String,
    pub episode_name: String,
    pub is_movie: bool,
    pub is_series: bool,
    pub options: IdentifyOptions,

    pub(crate) has_year_as_season: bool,
}

impl ParsedFile {
    /// Split a path into its name parts without looking at the contents.
    pub fn from_path(path: &str, options: &IdentifyOptions, original_file: Option<String>) -> Self {
        let extension = Path::new(path)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let without_ext = path.strip_suffix(extension.as_str()).unwrap_or(path);
        let filename = Path::new(without_ext)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| without_ext.to_string());

        Self {
            filepath: path.to_string(),
            original_file,
            filename,
            extension,
            options: options.clone(),
            ..Default::default()
        }
    }

    /// The path file operations must act on.
    ///
    /// After a parent directory retry this is the real file, not the synthetic
    /// name built from the directory.
    pub fn source_path(&self) -> &str {
        self.original_file.as_deref().unwrap_or(&self.filepath)
    }

    /// Original name of the file without the full path.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.filename, self.extension)
    }

    /// Kind of media the extension points at.
    pub fn media_kind(&self) -> MediaKind {
        if is_video_extension(&self.extension) {
            MediaKind::Video
        } else if is_music_extension(&self.extension) {
            MediaKind::Music
        } else {
            MediaKind::Other
        }
    }

    /// Current classification derived from the flags.
    pub fn classification(&self) -> Classification {
        match (self.is_movie, self.is_series) {
            (true, _) => Classification::Movie,
            (_, true) => Classification::Series,
            _ => Classification::Unresolved,
        }
    }

    /// Whether the season was read from a 4-digit year-like token.
    pub fn has_year_as_season(&self) -> bool {
        self.has_year_as_season
    }

    /// Season as a number, 0 when absent or not numeric.
    pub fn season_number(&self) -> u16 {
        parse_number("season", &self.season)
    }

    /// Episode as a number, 0 when absent or not numeric.
    pub fn episode_number(&self) -> u16 {
        parse_number("episode", &self.episode)
    }

    /// Render the name this file should get.
    pub fn target_name(&self) -> String {
        crate::generators::filename::render_target_name(self)
    }
}

fn parse_number(field: &str, value: &str) -> u16 {
    match value.parse() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!("Could not convert {} '{}' to a number: {}", field, value, e);
            0
        }
    }
}

impl std::fmt::Display for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Year: {}, Season: {}, Episode: {}, EpisodeName: {}, TechnicalInfo: {}, Name: {}, Movie: {}, Series: {}",
            self.year,
            self.season,
            self.episode,
            self.episode_name,
            self.technical_info,
            self.clean_name,
            self.is_movie,
            self.is_series
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_splits_name() {
        let file = ParsedFile::from_path(
            "/home/test/Angel.S04E12.mkv",
            &IdentifyOptions::default(),
            None,
        );
        assert_eq!(file.filename, "Angel.S04E12");
        assert_eq!(file.extension, ".mkv");
        assert_eq!(file.full_name(), "Angel.S04E12.mkv");
        assert_eq!(file.media_kind(), MediaKind::Video);
    }

    #[test]
    fn test_from_path_without_extension() {
        let file = ParsedFile::from_path("README", &IdentifyOptions::default(), None);
        assert_eq!(file.filename, "README");
        assert_eq!(file.extension, "");
        assert_eq!(file.media_kind(), MediaKind::Other);
    }

    #[test]
    fn test_source_path_prefers_original() {
        let mut file = ParsedFile::from_path("Show.S01E01.mkv", &IdentifyOptions::default(), None);
        assert_eq!(file.source_path(), "Show.S01E01.mkv");

        file.original_file = Some("/data/Show.S01E01/abc.mkv".to_string());
        assert_eq!(file.source_path(), "/data/Show.S01E01/abc.mkv");
    }

    #[test]
    fn test_numbers() {
        let mut file = ParsedFile::default();
        file.season = "04".to_string();
        file.episode = "12".to_string();
        assert_eq!(file.season_number(), 4);
        assert_eq!(file.episode_number(), 12);

        file.episode = String::new();
        assert_eq!(file.episode_number(), 0);
    }

    #[test]
    fn test_music_detected() {
        let file = ParsedFile::from_path("song.flac", &IdentifyOptions::default(), None);
        assert_eq!(file.media_kind(), MediaKind::Music);
    }
}
