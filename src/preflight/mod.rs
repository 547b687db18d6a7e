//! Preflight checks module.

mod naming;
mod tmdb;

use crate::models::config::Config;
use crate::Result;
use colored::Colorize;

/// Result of a preflight check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub message: String,
    pub hint: Option<String>,
}

impl CheckResult {
    pub fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.to_string(),
            hint: None,
        }
    }

    pub fn fail(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Run all preflight checks for the given configuration.
///
/// The TMDB check is only performed when lookups are enabled.
pub async fn run_preflight_checks(config: &Config) -> Result<Vec<CheckResult>> {
    let mut results = vec![naming::check(&config.naming)];

    if config.lookup {
        results.push(tmdb::check(&config.tmdb).await);
    }

    Ok(results)
}

/// Print preflight check results.
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        if result.success {
            println!(
                "{} {}: {}",
                "[OK]".green(),
                result.name.bold(),
                result.message
            );
        } else {
            println!(
                "{} {}: {}",
                "[FAIL]".red(),
                result.name.bold(),
                result.message
            );
            if let Some(ref hint) = result.hint {
                println!("  {} {}", "->".yellow(), hint);
            }
        }
    }
}

/// Check if all preflight checks passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let results = vec![
            CheckResult::ok("a", "fine"),
            CheckResult::fail("b", "broken", "fix it"),
        ];
        assert!(!all_passed(&results));
        assert!(all_passed(&results[..1]));
        assert_eq!(results[1].hint.as_deref(), Some("fix it"));
    }

    #[tokio::test]
    async fn test_no_tmdb_check_without_lookup() {
        let config = Config {
            lookup: false,
            ..Default::default()
        };
        let results = run_preflight_checks(&config).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].success);
    }
}
