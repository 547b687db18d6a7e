//! Command line argument definitions.

use crate::models::plan::Action;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Media Renamer - Tell movies from TV episodes and give them proper names
#[derive(Parser, Debug)]
#[command(name = "media-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Do not query TMDB, use only what is in the filename
    #[arg(long, global = true)]
    pub no_lookup: bool,

    /// Treat every file as a movie
    #[arg(long, global = true, conflicts_with = "force_series")]
    pub force_movie: bool,

    /// Treat every file as a series episode
    #[arg(long, global = true)]
    pub force_series: bool,

    /// Naming template for movies, e.g. "{n} ({y})/{n} ({y}) {r}"
    #[arg(long, global = true, value_name = "FORMAT")]
    pub movie_format: Option<String>,

    /// Naming template for series, e.g. "{n}/Season.{s}/{n}.S{s}E{e}.{r}"
    #[arg(long, global = true, value_name = "FORMAT")]
    pub series_format: Option<String>,

    /// Configuration file (default: <config dir>/media_renamer/config.toml)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify files and print what was found
    Identify {
        /// Files to identify
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a plan of where files should go
    Plan {
        /// File or directory to plan for
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Only look at direct children of a directory
        #[arg(long)]
        no_recursive: bool,

        /// Action recorded in the plan
        #[arg(short, long, value_enum, default_value_t = Action::Rename)]
        action: Action,

        /// Output path for plan.json
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identify() {
        let cli = Cli::try_parse_from([
            "media-renamer",
            "--no-lookup",
            "identify",
            "Angel.S04E12.mkv",
            "Heat.1995.mkv",
        ])
        .unwrap();
        assert!(cli.no_lookup);
        match cli.command {
            Commands::Identify { paths, json } => {
                assert_eq!(paths.len(), 2);
                assert!(!json);
            }
            _ => panic!("expected identify"),
        }
    }

    #[test]
    fn test_parse_plan_defaults() {
        let cli = Cli::try_parse_from(["media-renamer", "plan", "/downloads"]).unwrap();
        match cli.command {
            Commands::Plan {
                path,
                no_recursive,
                action,
                output,
            } => {
                assert_eq!(path, PathBuf::from("/downloads"));
                assert!(!no_recursive);
                assert_eq!(action, Action::Rename);
                assert!(output.is_none());
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_force_flags_conflict() {
        let result = Cli::try_parse_from([
            "media-renamer",
            "--force-movie",
            "--force-series",
            "identify",
            "a.mkv",
        ]);
        assert!(result.is_err());
    }
}
