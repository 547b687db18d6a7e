//! Display title derivation.
//!
//! Works on a copy of the filename with dots turned into spaces and strips
//! every matched technical token, rule by rule, in table order.

use crate::core::patterns::{PatternTable, RuleKind};
use crate::models::media::ParsedFile;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest title a removal may leave behind before it is reverted.
const MIN_NAME_LEN: usize = 2;

/// Series names shared by several distinct shows. The year is appended to
/// these so lookups and folders do not collide.
pub const AMBIGUOUS_TITLES: &[&str] = &["The Flash", "Doctor Who", "Magnum P.I.", "Charmed"];

static TRAILING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}.*").expect("trailing block pattern must compile"));

/// Derive the display title for an extracted and classified file.
pub fn clean_name(file: &ParsedFile, table: &PatternTable) -> String {
    let mut name = file.filename.replace('.', " ");

    if file.is_movie || file.is_series {
        name = strip_tokens(&name, file.is_movie, table);
    }

    let mut name = name.trim_matches(' ').to_string();

    // Anime titles often carry legitimate double spaces and dashes.
    if file.anime_group.is_empty() {
        tracing::debug!("Probably not anime, cleaning '{}' a bit more", name);
        name = TRAILING_BLOCK.replace(&name, "").into_owned();
        name = title_case(name.trim_matches(|c| c == ' ' || c == '-'));
    }

    if name.is_empty() {
        tracing::debug!("Nothing left of '{}', using the filename", file.filename);
        name = file.filename.clone();
    }

    strip_colons(&name)
}

/// Remove every eligible rule match from `name`.
pub fn strip_tokens(name: &str, is_movie: bool, table: &PatternTable) -> String {
    let mut name = name.to_string();

    for rule in table.rules() {
        if is_movie && rule.kind.ignored_for_movies() {
            continue;
        }
        let stripped = {
            let Some(caps) = rule.captures(&name) else {
                continue;
            };
            match rule.kind {
                RuleKind::Episode => name.replace(&caps[0], " "),
                RuleKind::Season | RuleKind::GroupAnime => match caps.get(1) {
                    Some(m) if !m.as_str().is_empty() => name.replace(m.as_str(), " "),
                    _ => continue,
                },
                _ => rule.replace_all_with_space(&name),
            }
        };

        if stripped.trim().chars().count() < MIN_NAME_LEN {
            tracing::debug!(
                "Removing {} from '{}' would leave '{}', keeping the previous name",
                rule.kind,
                name,
                stripped
            );
            continue;
        }
        name = stripped;
    }

    name
}

/// Capitalise the first letter of each word and lowercase the rest.
///
/// Apostrophes do not start a new word, so `bernie's` becomes `Bernie's`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = c == '\'' || c == '\u{2019}';
        }
    }
    out
}

/// Colons are not allowed in Windows filenames.
pub fn strip_colons(s: &str) -> String {
    s.replace(':', "")
}

/// Append the year to titles shared by several shows.
pub fn disambiguate(name: &str, year: &str) -> Option<String> {
    if !year.is_empty() && AMBIGUOUS_TITLES.contains(&name) {
        Some(format!("{} ({})", name, year))
    } else {
        None
    }
}
