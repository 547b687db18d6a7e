//! Identify command implementation.
//!
//! Runs every path through the identification pipeline and prints what was
//! found together with the rendered target name.

use crate::core::identifier::Identifier;
use crate::models::config::IdentifyOptions;
use crate::models::media::{Classification, MediaKind, ParsedFile};
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the identify command.
pub async fn identify(
    identifier: &Identifier,
    options: &IdentifyOptions,
    paths: &[PathBuf],
    json: bool,
) -> Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(identifier.identify(&path.to_string_lossy(), options).await);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in &files {
        print_file(file);
        println!();
    }

    Ok(())
}

fn print_file(file: &ParsedFile) {
    println!("{}", file.source_path().bold());

    match file.media_kind() {
        MediaKind::Video => {}
        MediaKind::Music => {
            println!("  {}", "music file, not identified".yellow());
            return;
        }
        MediaKind::Other => {
            println!("  {}", "not a video file".yellow());
            return;
        }
    }

    let kind = match file.classification() {
        Classification::Movie => "movie".green(),
        Classification::Series => "series".green(),
        Classification::Unresolved => "unresolved".red(),
    };
    println!("  {} {}", "Type:".bold(), kind);
    println!("  {} {}", "Name:".bold(), file.clean_name);

    print_field("Year:", &file.year);
    if file.is_series {
        print_field("Season:", &file.season);
        print_field("Episode:", &file.episode);
        print_field("Episode name:", &file.episode_name);
    }
    print_field("Resolution:", &file.resolution);
    print_field("Quality:", &file.quality);
    print_field("Technical:", &file.technical_info);
    if file.external_id != 0 {
        println!(
            "  {} {} ({})",
            "TMDB:".bold(),
            file.external_name,
            file.external_id
        );
    }

    println!("  {} {}", "Target:".bold(), file.target_name().cyan());
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {} {}", label.bold(), value);
    }
}
