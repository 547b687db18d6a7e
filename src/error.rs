//! Error types for the media renamer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media renamer.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable or tmdb.api_key in config.toml")]
    TmdbApiKeyMissing,

    #[error("TMDB API key invalid")]
    TmdbApiKeyInvalid,

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    // TMDB errors
    #[error("TMDB search failed: {0}")]
    TmdbSearchError(String),

    // Configuration errors
    #[error("Invalid naming template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Pattern errors
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
