//! Token extraction.
//!
//! Applies each rule of a [`PatternTable`] once to the raw filename (dots
//! still present) and fills the structured fields of a [`ParsedFile`].

use crate::core::patterns::{PatternTable, RuleKind};
use crate::models::media::ParsedFile;

/// Characters that delimit a token when looking back for the start of the
/// technical info block.
const SEPARATORS: &[u8] = b".- ";

/// Characters surrounding the number in an anime episode match. The version
/// suffix marker `v` is included so `01v2` yields episode `01`.
const ANIME_EPISODE_TRIM: &[char] = &[' ', '-', '_', '.', 'p', '(', 'v', '['];

/// Populate year, season, episode and tag fields from `file.filename`.
pub fn extract(file: &mut ParsedFile, table: &PatternTable) {
    let filename = file.filename.clone();

    for rule in table.rules() {
        let Some(caps) = rule.captures(&filename) else {
            continue;
        };
        let group = |idx: usize| caps.get(idx).map(|m| m.as_str()).unwrap_or("");

        match rule.kind {
            RuleKind::YearAsSeason => {
                tracing::debug!("Found year as season: {}", group(2));
                file.has_year_as_season = true;
                file.season = group(2).to_string();
            }
            RuleKind::Year => {
                if file.season == group(2) {
                    tracing::warn!(
                        "Found a year '{}' that is the same as the season in '{}', ignoring the year",
                        group(2),
                        filename
                    );
                } else {
                    file.year = group(2).to_string();
                }
            }
            RuleKind::Season => {
                if file.season.is_empty() {
                    file.season = zero_pad(group(2));
                } else {
                    tracing::debug!("Season already found earlier, skipping the normal season match");
                }
            }
            RuleKind::Episode => {
                file.episode = zero_pad(group(1));
            }
            RuleKind::Quality => {
                file.quality = group(1).to_string();
            }
            RuleKind::Resolution => {
                file.resolution = group(2).to_string();
            }
            RuleKind::GroupAnime => {
                file.anime_group = group(1).to_string();
            }
            RuleKind::EpisodeAnime => {
                if file.episode.is_empty() {
                    file.episode = group(0).trim_matches(ANIME_EPISODE_TRIM).to_string();
                    file.season = "00".to_string();
                }
            }
            _ => {}
        }
    }

    if let Some(info) = technical_info(&filename, table) {
        tracing::debug!("Extracted technical info: {}", info);
        file.technical_info = info;
    }
}

/// Pad a 1-digit number to two digits. Longer values are kept as they are.
pub fn zero_pad(value: &str) -> String {
    format!("{:0>2}", value)
}

/// Find the verbatim block of technical tags at the end of `filename`.
///
/// Starts at the earliest resolution, quality, codec or audio match and walks
/// back to the nearest separator so partially matched tokens stay whole.
pub fn technical_info(filename: &str, table: &PatternTable) -> Option<String> {
    let match_start = table
        .rules()
        .iter()
        .filter(|rule| rule.kind.is_technical())
        .filter_map(|rule| rule.find_start(filename))
        .min()?;

    let bytes = filename.as_bytes();
    let start = (0..match_start)
        .rev()
        .find(|&i| SEPARATORS.contains(&bytes[i]))
        .map(|i| i + 1)
        .unwrap_or(match_start);

    if start < filename.len() {
        Some(filename[start..].to_string())
    } else {
        None
    }
}
