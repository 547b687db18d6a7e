//! Plan command implementation.
//!
//! Collects candidates, identifies them and prints where each file would go.
//! The plan is only written to disk when an output path is given.

use crate::core::identifier::Identifier;
use crate::core::planner::{self, Planner};
use crate::models::config::{IdentifyOptions, LibraryConfig};
use crate::models::plan::Action;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the plan command.
pub async fn plan(
    identifier: Identifier,
    options: IdentifyOptions,
    library: LibraryConfig,
    source: &Path,
    recursive: bool,
    action: Action,
    output: Option<&Path>,
) -> Result<()> {
    if !source.exists() {
        return Err(crate::Error::PathNotFound(source.display().to_string()));
    }

    // Print configuration
    println!("  {} {}", "Source:".bold(), source.display());
    println!("  {} {}", "Action:".bold(), action);
    if action != Action::Rename {
        println!("  {} {}", "Movies:".bold(), library.movie_folder.display());
        println!("  {} {}", "Series:".bold(), library.series_folder.display());
    }
    println!();

    let planner = Planner::new(identifier, options, library, action);
    let plan = planner.generate(source, recursive).await?;

    for op in &plan.operations {
        let kind = if op.is_movie { "movie " } else { "series" };
        println!(
            "{} {} {}",
            kind.dimmed(),
            op.source_path.display(),
            "->".yellow()
        );
        println!("       {}", op.target_path.display().to_string().cyan());
    }

    // Print summary
    println!();
    println!("{}", "Plan Summary".bold().green());
    println!("  {} {}", "Files to organize:".bold(), plan.operations.len());
    println!("  {} {}", "Unresolved:".bold(), plan.unresolved.len());

    if !plan.unresolved.is_empty() {
        println!();
        println!("{}", "Unresolved Files:".bold().yellow());
        for path in &plan.unresolved {
            println!("  {}", path.display().to_string().red());
        }
    }

    if let Some(output_path) = output {
        let output_path = if output_path.is_dir() {
            planner::default_plan_path(output_path)
        } else {
            output_path.to_path_buf()
        };
        planner::save_plan(&plan, &output_path)?;
        println!();
        println!(
            "{} {}",
            "Plan saved to:".bold().green(),
            output_path.display()
        );
    }

    Ok(())
}
