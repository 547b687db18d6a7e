//! Media Renamer CLI
//!
//! A command-line tool that tells movies from TV episodes and gives them
//! normalized names.

use clap::Parser;
use media_renamer::cli::{
    args::{Cli, Commands},
    commands::{identify, plan},
};
use media_renamer::models::config::{self, Config, IdentifyOptions};
use media_renamer::preflight;
use media_renamer::services::tmdb::{TmdbClient, TmdbConfig};
use media_renamer::Identifier;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load configuration, command line flags win
    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    apply_overrides(&mut config, &cli);

    if !cli.skip_preflight {
        run_preflight_checks(&config).await?;
    }

    let identifier = build_identifier(&mut config);

    let mut options = IdentifyOptions::from_config(&config);
    options.force_movie = cli.force_movie;
    options.force_series = cli.force_series;
    options.validate()?;

    // Run the appropriate command
    match cli.command {
        Commands::Identify { paths, json } => {
            identify::identify(&identifier, &options, &paths, json).await?;
        }

        Commands::Plan {
            path,
            no_recursive,
            action,
            output,
        } => {
            plan::plan(
                identifier,
                options,
                config.library.clone(),
                &path,
                !no_recursive,
                action,
                output.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_renamer=debug")
    } else {
        EnvFilter::new("media_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_lookup {
        config.lookup = false;
    }
    if let Some(ref format) = cli.movie_format {
        config.naming.movie_format = format.clone();
    }
    if let Some(ref format) = cli.series_format {
        config.naming.series_format = format.clone();
    }
}

/// Identifier backed by TMDB when lookups are enabled and a key is configured.
///
/// Lookups are switched off when no key can be found.
fn build_identifier(config: &mut Config) -> Identifier {
    if !config.lookup {
        return Identifier::new();
    }

    match TmdbConfig::from_settings(&config.tmdb) {
        Ok(tmdb) => Identifier::with_provider(Arc::new(TmdbClient::new(tmdb))),
        Err(e) => {
            tracing::warn!("{}, continuing without lookups", e);
            config.lookup = false;
            Identifier::new()
        }
    }
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
