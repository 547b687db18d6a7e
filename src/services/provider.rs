//! Metadata lookup collaborator.
//!
//! The identification pipeline only talks to this trait, so TMDB can be
//! swapped for an in-memory fake in tests.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// First series hit for a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMatch {
    pub id: u64,
    pub name: String,
    /// First air date as `YYYY-MM-DD`, when known.
    pub first_air_date: Option<String>,
}

/// First movie hit for a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMatch {
    pub id: u64,
    pub title: String,
}

/// A season as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonName {
    pub ordinal: u16,
    pub name: String,
}

/// Title and episode lookup service.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search series by title, optionally restricted to a first-air year.
    async fn search_series(&self, title: &str, year: Option<u16>) -> Result<Option<SeriesMatch>>;

    /// Search movies by title, optionally restricted to a release year.
    async fn search_movie(&self, title: &str, year: Option<u16>) -> Result<Option<MovieMatch>>;

    /// Title of a single episode.
    async fn episode_title(&self, id: u64, season: u16, episode: u16) -> Result<Option<String>>;

    /// All seasons of a series.
    async fn season_names(&self, id: u64) -> Result<Vec<SeasonName>>;
}
