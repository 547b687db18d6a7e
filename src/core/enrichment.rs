//! Canonical names from an external metadata provider.
//!
//! Every failure here is logged and swallowed: the locally derived fields are
//! always good enough to continue.

use crate::models::media::ParsedFile;
use crate::services::provider::MetadataProvider;
use crate::Result;
use chrono::{Datelike, NaiveDate};

/// Replace locally derived names with the provider's canonical ones.
pub async fn enrich(file: &mut ParsedFile, provider: &dyn MetadataProvider) {
    tracing::debug!(
        "Trying to locate data for '{}' (year: '{}')",
        file.clean_name,
        file.year
    );

    let result = if file.is_series {
        lookup_series(file, provider).await
    } else if file.is_movie {
        lookup_movie(file, provider).await
    } else {
        Ok(())
    };

    match result {
        Ok(()) => tracing::debug!(
            "Received lookup results, external id: {}, external name: '{}'",
            file.external_id,
            file.external_name
        ),
        Err(e) => tracing::warn!("Got an error looking up '{}': {}", file.clean_name, e),
    }
}

async fn lookup_series(file: &mut ParsedFile, provider: &dyn MetadataProvider) -> Result<()> {
    let Some(series) = provider
        .search_series(&file.clean_name, year_hint(&file.year))
        .await?
    else {
        tracing::debug!("No series results found for '{}'", file.clean_name);
        return Ok(());
    };

    file.external_id = series.id;
    file.external_name = series.name.clone();
    file.clean_name = series.name;
    if file.year.is_empty() {
        if let Some(year) = series.first_air_date.as_deref().and_then(year_from_date) {
            file.year = year;
        }
    }

    if !file.season.is_empty() && !file.episode.is_empty() {
        let (season, episode) = (file.season_number(), file.episode_number());
        match provider.episode_title(series.id, season, episode).await {
            Ok(Some(title)) if !title.is_empty() => {
                file.episode_name = sanitize_episode_title(&title);
                tracing::debug!(
                    "Found episode name '{}' for S{:02}E{:02}",
                    file.episode_name,
                    season,
                    episode
                );
            }
            Ok(_) => tracing::debug!("No episode name for S{:02}E{:02}", season, episode),
            Err(e) => tracing::debug!(
                "Could not fetch episode name for S{:02}E{:02}: {}",
                season,
                episode,
                e
            ),
        }
    }

    Ok(())
}

async fn lookup_movie(file: &mut ParsedFile, provider: &dyn MetadataProvider) -> Result<()> {
    let Some(movie) = provider
        .search_movie(&file.clean_name, year_hint(&file.year))
        .await?
    else {
        tracing::debug!("No movie results found for '{}'", file.clean_name);
        return Ok(());
    };

    file.external_id = movie.id;
    file.external_name = movie.title.clone();
    file.clean_name = movie.title;
    Ok(())
}

/// Translate a year-like season into the provider's season ordinal.
///
/// Only runs when the file has a year as season and an external id. The
/// season is left as found when no season is named `Season <year>`.
pub async fn reconcile_year_as_season(file: &mut ParsedFile, provider: &dyn MetadataProvider) {
    if !file.has_year_as_season || file.external_id == 0 {
        return;
    }

    let seasons = match provider.season_names(file.external_id).await {
        Ok(seasons) => seasons,
        Err(e) => {
            tracing::error!(
                "Could not fetch seasons for external id {}: {}",
                file.external_id,
                e
            );
            return;
        }
    };

    let wanted = format!("Season {}", file.season);
    match seasons.iter().find(|s| s.name == wanted) {
        Some(season) => {
            tracing::debug!("Found a match for '{}', using season number {}", wanted, season.ordinal);
            file.season = format!("{:02}", season.ordinal);
        }
        None => tracing::warn!("Could not translate season as year '{}' to a season number", file.season),
    }
}

/// Make an episode title safe to use in a path.
pub fn sanitize_episode_title(title: &str) -> String {
    title.replace(':', "").replace(['/', '\\'], "-")
}

fn year_hint(year: &str) -> Option<u16> {
    year.parse().ok()
}

fn year_from_date(date: &str) -> Option<String> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => Some(d.year().to_string()),
        Err(_) => date
            .split('-')
            .next()
            .filter(|y| !y.is_empty())
            .map(|y| y.to_string()),
    }
}
