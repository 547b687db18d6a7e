//! TMDB API client.

use crate::services::provider::{MetadataProvider, MovieMatch, SeasonName, SeriesMatch};
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key or Bearer token (JWT)
    pub api_key: String,
    pub language: String,
    /// Whether to use Bearer token authentication (API v4 style)
    pub use_bearer: bool,
}

impl TmdbConfig {
    /// Create config from the `[tmdb]` section of the configuration file.
    /// Supports both API key (v3) and Bearer token (v4) formats; the key
    /// defaults to the `TMDB_API_KEY` environment variable.
    pub fn from_settings(settings: &crate::models::config::TmdbConfig) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(crate::Error::TmdbApiKeyMissing)?;
        Ok(Self::with_key(api_key, &settings.language))
    }

    fn with_key(api_key: String, language: &str) -> Self {
        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        Self {
            api_key,
            language: language.to_string(),
            use_bearer,
        }
    }
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

/// Movie search result.
#[derive(Debug, Deserialize)]
pub struct MovieSearchResult {
    pub results: Vec<MovieSearchItem>,
}

/// Movie search item.
#[derive(Debug, Deserialize)]
pub struct MovieSearchItem {
    pub id: u64,
    pub title: String,
}

/// TV show search result.
#[derive(Debug, Deserialize)]
pub struct TvSearchResult {
    pub results: Vec<TvSearchItem>,
}

/// TV show search item.
#[derive(Debug, Deserialize)]
pub struct TvSearchItem {
    pub id: u64,
    pub name: String,
    pub first_air_date: Option<String>,
}

/// TV show details. Only the season list is read.
#[derive(Debug, Deserialize)]
pub struct TvDetails {
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
}

/// Season entry of a TV show.
#[derive(Debug, Deserialize)]
pub struct SeasonSummary {
    pub name: String,
    pub season_number: u16,
}

/// Episode details.
#[derive(Debug, Deserialize)]
pub struct EpisodeDetails {
    pub name: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.config.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.config.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        if self.config.use_bearer {
            format!(
                "{}/{}?language={}{}",
                TMDB_BASE_URL,
                path,
                self.config.language,
                extra_params
            )
        } else {
            format!(
                "{}/{}?api_key={}&language={}{}",
                TMDB_BASE_URL,
                path,
                self.config.api_key,
                self.config.language,
                extra_params
            )
        }
    }

    /// Send a GET request and decode the JSON body, failing on non-2xx responses.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.build_request(url).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(crate::Error::TmdbApiKeyInvalid);
        }
        if !status.is_success() {
            return Err(crate::Error::TmdbSearchError(format!(
                "TMDB returned {}",
                status
            )));
        }
        Ok(resp.json().await?)
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = if self.config.use_bearer {
            format!("{}/authentication", TMDB_BASE_URL)
        } else {
            format!(
                "{}/authentication?api_key={}",
                TMDB_BASE_URL, self.config.api_key
            )
        };

        match self.build_request(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Search for movies.
    pub async fn search_movies(&self, query: &str, year: Option<u16>) -> Result<Vec<MovieSearchItem>> {
        let year_param = year.map(|y| format!("&year={}", y)).unwrap_or_default();
        let url = self.build_url(
            "search/movie",
            &format!("&query={}{}", urlencoding::encode(query), year_param)
        );

        let resp: MovieSearchResult = self.get_json(&url).await?;
        Ok(resp.results)
    }

    /// Search for TV shows.
    pub async fn search_tv(&self, query: &str, year: Option<u16>) -> Result<Vec<TvSearchItem>> {
        let year_param = year.map(|y| format!("&first_air_date_year={}", y)).unwrap_or_default();
        let url = self.build_url(
            "search/tv",
            &format!("&query={}{}", urlencoding::encode(query), year_param)
        );

        let resp: TvSearchResult = self.get_json(&url).await?;
        Ok(resp.results)
    }

    /// Get TV show details, including the season list.
    pub async fn get_tv_details(&self, tv_id: u64) -> Result<TvDetails> {
        let url = self.build_url(&format!("tv/{}", tv_id), "");
        self.get_json(&url).await
    }

    /// Get episode details.
    pub async fn get_episode_details(
        &self,
        tv_id: u64,
        season_number: u16,
        episode_number: u16,
    ) -> Result<EpisodeDetails> {
        let url = self.build_url(
            &format!("tv/{}/season/{}/episode/{}", tv_id, season_number, episode_number),
            ""
        );
        self.get_json(&url).await
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_series(&self, title: &str, year: Option<u16>) -> Result<Option<SeriesMatch>> {
        let results = self.search_tv(title, year).await?;
        tracing::debug!("TMDB returned {} series results for '{}'", results.len(), title);

        Ok(results.into_iter().next().map(|item| SeriesMatch {
            id: item.id,
            name: item.name,
            first_air_date: item.first_air_date.filter(|d| !d.is_empty()),
        }))
    }

    async fn search_movie(&self, title: &str, year: Option<u16>) -> Result<Option<MovieMatch>> {
        let results = self.search_movies(title, year).await?;
        tracing::debug!("TMDB returned {} movie results for '{}'", results.len(), title);

        Ok(results.into_iter().next().map(|item| MovieMatch {
            id: item.id,
            title: item.title,
        }))
    }

    async fn episode_title(&self, id: u64, season: u16, episode: u16) -> Result<Option<String>> {
        let details = self.get_episode_details(id, season, episode).await?;
        Ok(Some(details.name).filter(|n| !n.is_empty()))
    }

    async fn season_names(&self, id: u64) -> Result<Vec<SeasonName>> {
        let details = self.get_tv_details(id).await?;
        Ok(details
            .seasons
            .into_iter()
            .map(|s| SeasonName {
                ordinal: s.season_number,
                name: s.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: &str) -> TmdbClient {
        TmdbClient::new(TmdbConfig::with_key(key.to_string(), "en-US"))
    }

    #[test]
    fn test_bearer_detection() {
        assert!(TmdbConfig::with_key("eyJhbGciOi".to_string(), "en-US").use_bearer);
        assert!(!TmdbConfig::with_key("0123abcd".to_string(), "en-US").use_bearer);
    }

    #[test]
    fn test_build_url_v3() {
        let url = client("abc").build_url("search/tv", "&query=Angel");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/tv?api_key=abc&language=en-US&query=Angel"
        );
    }

    #[test]
    fn test_build_url_bearer_omits_key() {
        let url = client("eyJtoken").build_url("tv/1", "");
        assert_eq!(url, "https://api.themoviedb.org/3/tv/1?language=en-US");
    }

    #[test]
    fn test_from_settings_requires_key() {
        let settings = crate::models::config::TmdbConfig {
            api_key: Some("  ".to_string()),
            language: "en-US".to_string(),
        };
        assert!(matches!(
            TmdbConfig::from_settings(&settings),
            Err(crate::Error::TmdbApiKeyMissing)
        ));
    }

    #[test]
    fn test_deserialize_tv_details() {
        let json = r#"{
            "id": 1,
            "name": "Gintama",
            "first_air_date": "2006-04-04",
            "seasons": [
                {"name": "Specials", "season_number": 0},
                {"name": "Season 2015", "season_number": 5}
            ]
        }"#;
        let details: TvDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.seasons.len(), 2);
        assert_eq!(details.seasons[1].name, "Season 2015");
        assert_eq!(details.seasons[1].season_number, 5);
    }

    #[test]
    fn test_deserialize_search_and_episode() {
        let json = r#"{"results": [{"id": 603, "title": "The Matrix", "release_date": "1999-03-30"}]}"#;
        let movies: MovieSearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(movies.results[0].id, 603);
        assert_eq!(movies.results[0].title, "The Matrix");

        let json = r#"{"id": 9, "name": "Soulless", "season_number": 4, "episode_number": 12}"#;
        let episode: EpisodeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(episode.name, "Soulless");
    }
}
