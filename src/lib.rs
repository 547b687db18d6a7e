//! Media Renamer Library
//!
//! Identifies movies and TV episodes from their filenames and renders
//! normalized names for them, optionally using TMDB for canonical titles.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use crate::core::identifier::{parse_file, Identifier};
pub use error::{Error, Result};
pub use models::config::IdentifyOptions;
pub use models::media::ParsedFile;
