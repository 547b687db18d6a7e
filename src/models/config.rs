//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default template used to name movies.
pub const DEFAULT_MOVIE_FORMAT: &str = "{n} ({y})/{n} ({y}) {r}";

/// Default template used to name series episodes.
pub const DEFAULT_SERIES_FORMAT: &str = "{n}/Season.{s}/{n}.S{s}E{e}.{r}";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether TMDB should be used for better look-up and matching.
    pub lookup: bool,
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Naming templates.
    pub naming: NamingConfig,
    /// Library placement and scanning.
    pub library: LibraryConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Language for responses.
    pub language: String,
}

/// Naming templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Template used for movies.
    pub movie_format: String,
    /// Template used for series.
    pub series_format: String,
}

/// Where organized files go and which files are considered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Folder where movies should be placed.
    pub movie_folder: PathBuf,
    /// Folder where series should be placed.
    pub series_folder: PathBuf,
    /// Minimal size in MB for a video file to be processed.
    pub min_file_size_mb: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: true,
            tmdb: TmdbConfig::default(),
            naming: NamingConfig::default(),
            library: LibraryConfig::default(),
        }
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TMDB_API_KEY").ok(),
            language: "en-US".to_string(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            movie_format: DEFAULT_MOVIE_FORMAT.to_string(),
            series_format: DEFAULT_SERIES_FORMAT.to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let media = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("media");
        Self {
            movie_folder: media.join("Movies"),
            series_folder: media.join("TV Shows"),
            min_file_size_mb: 120,
        }
    }
}

impl LibraryConfig {
    /// Minimal file size in bytes.
    pub fn min_file_size_bytes(&self) -> u64 {
        self.min_file_size_mb.saturating_mul(1_000_000)
    }
}

/// Per-call identification options.
///
/// These are immutable for the duration of one identification and are carried
/// on the resulting [`ParsedFile`](crate::models::media::ParsedFile) so the
/// renderer can pick the right template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyOptions {
    /// Query the metadata provider for canonical names.
    pub lookup: bool,
    /// Treat the file as a movie regardless of what was found.
    pub force_movie: bool,
    /// Treat the file as a series episode regardless of what was found.
    pub force_series: bool,
    /// Template used for movies.
    pub movie_format: String,
    /// Template used for series.
    pub series_format: String,
    /// The real file when identification runs on a synthetic name.
    ///
    /// Setting this disables the parent directory retry.
    pub original_file: Option<String>,
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self {
            lookup: false,
            force_movie: false,
            force_series: false,
            movie_format: DEFAULT_MOVIE_FORMAT.to_string(),
            series_format: DEFAULT_SERIES_FORMAT.to_string(),
            original_file: None,
        }
    }
}

impl IdentifyOptions {
    /// Build options from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            lookup: config.lookup,
            movie_format: config.naming.movie_format.clone(),
            series_format: config.naming.series_format.clone(),
            ..Default::default()
        }
    }

    /// Check that both templates can produce a name.
    pub fn validate(&self) -> crate::Result<()> {
        if self.force_movie && self.force_series {
            return Err(crate::Error::Config(
                "force-movie and force-series cannot be combined".to_string(),
            ));
        }
        if self.movie_format.trim().is_empty() {
            return Err(crate::Error::InvalidTemplate("movie format is empty".to_string()));
        }
        if self.series_format.trim().is_empty() {
            return Err(crate::Error::InvalidTemplate("series format is empty".to_string()));
        }
        for placeholder in ["{s}", "{e}", "{t}"] {
            if self.movie_format.contains(placeholder) {
                tracing::warn!(
                    "Movie format contains {} which has no value for movies, it will be kept as literal text",
                    placeholder
                );
            }
        }
        Ok(())
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_renamer")
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
}

/// Load configuration from file.
///
/// Falls back to defaults when the file is missing or cannot be parsed.
pub fn load_config() -> Config {
    let config_path = default_config_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!(
                    "Ignoring config file {}: {}",
                    config_path.display(),
                    e
                );
            }
        }
    }

    Config::default()
}
