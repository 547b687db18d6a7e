//! Naming template preflight check.

use super::CheckResult;
use crate::models::config::NamingConfig;

/// Check that both naming templates can produce a name.
pub fn check(naming: &NamingConfig) -> CheckResult {
    if naming.movie_format.trim().is_empty() {
        return CheckResult::fail(
            "Naming",
            "movie format is empty",
            "Set naming.movie_format in config.toml or pass --movie-format",
        );
    }
    if naming.series_format.trim().is_empty() {
        return CheckResult::fail(
            "Naming",
            "series format is empty",
            "Set naming.series_format in config.toml or pass --series-format",
        );
    }
    if !naming.movie_format.contains("{n}") || !naming.series_format.contains("{n}") {
        return CheckResult::fail(
            "Naming",
            "template without {n}",
            "Every file would get the same name; include {n} in both formats",
        );
    }
    CheckResult::ok("Naming", "templates look usable")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_pass() {
        assert!(check(&NamingConfig::default()).success);
    }

    #[test]
    fn test_missing_name_placeholder_fails() {
        let naming = NamingConfig {
            movie_format: "{y}".to_string(),
            ..Default::default()
        };
        let result = check(&naming);
        assert!(!result.success);
        assert!(result.hint.is_some());
    }
}
