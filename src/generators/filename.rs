//! Target filename rendering.
//!
//! Placeholders:
//! - `{n}` clean name
//! - `{r}` resolution
//! - `{q}` quality
//! - `{y}` year
//! - `{i}` technical info
//! - `{s}`, `{e}`, `{t}` season, episode and episode title (series only)
//!
//! Anything else, including series placeholders in a movie template, is kept
//! as literal text.

use crate::models::media::ParsedFile;

/// Render the name `file` should be given, extension included.
///
/// Unclassified files use their own name as the template, so they only get
/// the surrounding whitespace and a trailing dot cleaned up.
pub fn render_target_name(file: &ParsedFile) -> String {
    let template = if file.is_movie {
        &file.options.movie_format
    } else if file.is_series {
        &file.options.series_format
    } else {
        &file.filename
    };

    let mut name = template
        .replace("{n}", &file.clean_name)
        .replace("{r}", &file.resolution)
        .replace("{q}", &file.quality)
        .replace("{y}", &file.year)
        .replace("{i}", &file.technical_info);

    if file.is_series {
        name = name
            .replace("{s}", &file.season)
            .replace("{e}", &file.episode)
            .replace("{t}", &file.episode_name);
    }

    let name = name.trim_matches(' ');
    // An empty placeholder next to a literal dot leaves a dangling separator.
    let name = name.strip_suffix('.').unwrap_or(name);

    format!("{}{}", name, file.extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::IdentifyOptions;

    fn series() -> ParsedFile {
        ParsedFile {
            filename: "Angel.S04E12".to_string(),
            extension: ".mkv".to_string(),
            clean_name: "Angel".to_string(),
            season: "04".to_string(),
            episode: "12".to_string(),
            is_series: true,
            options: IdentifyOptions::default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_series_default_template() {
        assert_eq!(render_target_name(&series()), "Angel/Season.04/Angel.S04E12.mkv");
    }

    #[test]
    fn test_render_series_with_resolution() {
        let mut file = series();
        file.resolution = "720p".to_string();
        assert_eq!(render_target_name(&file), "Angel/Season.04/Angel.S04E12.720p.mkv");
    }

    #[test]
    fn test_render_movie_default_template() {
        let file = ParsedFile {
            extension: ".mkv".to_string(),
            clean_name: "Apollo 11".to_string(),
            year: "2019".to_string(),
            resolution: "1080p".to_string(),
            is_movie: true,
            options: IdentifyOptions::default(),
            ..Default::default()
        };
        assert_eq!(render_target_name(&file), "Apollo 11 (2019)/Apollo 11 (2019) 1080p.mkv");
    }

    #[test]
    fn test_render_movie_trims_trailing_space() {
        let file = ParsedFile {
            extension: ".mkv".to_string(),
            clean_name: "The Matrix Revolutions".to_string(),
            year: "2003".to_string(),
            is_movie: true,
            options: IdentifyOptions::default(),
            ..Default::default()
        };
        assert_eq!(
            render_target_name(&file),
            "The Matrix Revolutions (2003)/The Matrix Revolutions (2003).mkv"
        );
    }

    #[test]
    fn test_unclassified_keeps_name() {
        let file = ParsedFile {
            filename: "home video".to_string(),
            extension: ".mkv".to_string(),
            options: IdentifyOptions::default(),
            ..Default::default()
        };
        assert_eq!(render_target_name(&file), "home video.mkv");
    }

    #[test]
    fn test_unclassified_is_cleaned_up() {
        let file = ParsedFile {
            filename: " home video .".to_string(),
            extension: ".mkv".to_string(),
            options: IdentifyOptions::default(),
            ..Default::default()
        };
        assert_eq!(render_target_name(&file), "home video.mkv");
    }

    #[test]
    fn test_series_placeholders_literal_in_movie() {
        let file = ParsedFile {
            extension: ".mkv".to_string(),
            clean_name: "Heat".to_string(),
            year: "1995".to_string(),
            is_movie: true,
            options: IdentifyOptions {
                movie_format: "{n} {t}".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(render_target_name(&file), "Heat {t}.mkv");
    }

    #[test]
    fn test_unknown_placeholder_is_literal() {
        let mut file = series();
        file.options.series_format = "{n} {x} S{s}E{e} - {t}".to_string();
        file.episode_name = "Soulless".to_string();
        assert_eq!(render_target_name(&file), "Angel {x} S04E12 - Soulless.mkv");
    }

    #[test]
    fn test_technical_info_placeholder() {
        let mut file = series();
        file.technical_info = "720p.HDTV.x264-SVA".to_string();
        file.options.series_format = "{n}.S{s}E{e}.{i}".to_string();
        assert_eq!(render_target_name(&file), "Angel.S04E12.720p.HDTV.x264-SVA.mkv");
    }

    #[test]
    fn test_render_is_idempotent() {
        let file = series();
        assert_eq!(render_target_name(&file), render_target_name(&file));
    }
}
