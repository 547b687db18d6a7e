//! Plan generation module.
//!
//! Coordinates the planning process:
//! 1. Collect candidate files
//! 2. Identify them concurrently
//! 3. Render target names and place them according to the action
//! 4. Output plan.json
//!
//! Nothing in here modifies the filesystem apart from writing the plan.

use crate::core::identifier::Identifier;
use crate::core::scanner::collect_candidates;
use crate::models::config::{IdentifyOptions, LibraryConfig};
use crate::models::media::{MediaKind, ParsedFile};
use crate::models::plan::{Action, Plan, PlannedOperation};
use crate::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Files identified at the same time.
const CONCURRENT_LIMIT: usize = 8;

/// Plan generator.
pub struct Planner {
    identifier: Identifier,
    options: IdentifyOptions,
    library: LibraryConfig,
    action: Action,
}

impl Planner {
    /// Create a new planner.
    pub fn new(
        identifier: Identifier,
        options: IdentifyOptions,
        library: LibraryConfig,
        action: Action,
    ) -> Self {
        Self {
            identifier,
            options,
            library,
            action,
        }
    }

    /// Generate a plan for everything under `source`.
    pub async fn generate(&self, source: &Path, recursive: bool) -> Result<Plan> {
        tracing::info!("Generating plan for {:?}", source);
        tracing::info!("Action: {}", self.action);

        let candidates =
            collect_candidates(source, recursive, self.library.min_file_size_bytes())?;
        if candidates.is_empty() {
            tracing::warn!("No candidate files found in {:?}", source);
        }

        let files = self.identify_all(&candidates).await;

        let mut operations = Vec::new();
        let mut unresolved = Vec::new();
        for file in &files {
            match self.operation_for(file) {
                Some(op) => operations.push(op),
                None if file.media_kind() == MediaKind::Video => {
                    unresolved.push(PathBuf::from(file.source_path()));
                }
                None => tracing::debug!("Skipping non-video file {:?}", file.source_path()),
            }
        }

        validate_no_duplicate_targets(&operations)?;

        Ok(Plan {
            version: "1.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            source_path: source.to_path_buf(),
            action: self.action,
            operations,
            unresolved,
        })
    }

    /// Identify every path, at most [`CONCURRENT_LIMIT`] at a time.
    ///
    /// Results come back in the order of `paths`.
    pub async fn identify_all(&self, paths: &[PathBuf]) -> Vec<ParsedFile> {
        use futures::stream::{self, StreamExt};

        stream::iter(paths)
            .map(|path| {
                let path = path.to_string_lossy().to_string();
                async move { self.identifier.identify(&path, &self.options).await }
            })
            .buffered(CONCURRENT_LIMIT)
            .collect()
            .await
    }

    /// The operation for one identified file, or `None` when it was not
    /// classified.
    pub fn operation_for(&self, file: &ParsedFile) -> Option<PlannedOperation> {
        if !file.is_movie && !file.is_series {
            return None;
        }

        let target_name = file.target_name();
        let source_path = PathBuf::from(file.source_path());
        let target_path = target_path(&source_path, &target_name, file.is_movie, self.action, &self.library);

        tracing::debug!("Planned {} {:?} -> {:?}", self.action, source_path, target_path);

        Some(PlannedOperation {
            source_path,
            target_path,
            action: self.action,
            is_movie: file.is_movie,
            is_series: file.is_series,
        })
    }
}

/// Where a file with the rendered `target_name` should end up.
///
/// Renames stay in the source directory and only use the base name of the
/// rendered target. Everything else goes below the movie or series folder.
pub fn target_path(
    source: &Path,
    target_name: &str,
    is_movie: bool,
    action: Action,
    library: &LibraryConfig,
) -> PathBuf {
    match action {
        Action::Rename => {
            let base = Path::new(target_name)
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| target_name.into());
            source
                .parent()
                .map(|p| p.join(&base))
                .unwrap_or_else(|| PathBuf::from(&base))
        }
        _ if is_movie => library.movie_folder.join(target_name),
        _ => library.series_folder.join(target_name),
    }
}

/// Refuse plans where two sources would land on the same target.
fn validate_no_duplicate_targets(operations: &[PlannedOperation]) -> Result<()> {
    let mut target_to_sources: HashMap<&Path, Vec<&Path>> = HashMap::new();
    for op in operations {
        target_to_sources
            .entry(op.target_path.as_path())
            .or_default()
            .push(op.source_path.as_path());
    }

    let mut duplicates: Vec<_> = target_to_sources
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .collect();
    if duplicates.is_empty() {
        return Ok(());
    }
    duplicates.sort();

    let mut error_msg = String::from("Duplicate target paths detected.\n\n");
    for (target, sources) in &duplicates {
        error_msg.push_str(&format!("Target: {:?}\n", target));
        for src in sources {
            error_msg.push_str(&format!("    - {:?}\n", src));
        }
    }
    error_msg.push_str("Plan generation aborted.");

    Err(crate::Error::other(error_msg))
}

/// Save a plan to a JSON file.
pub fn save_plan(plan: &Plan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!("Plan saved to {:?}", path);
    Ok(())
}

/// Load a plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<Plan> {
    let content = fs::read_to_string(path)?;
    let plan: Plan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Get the default plan output path inside `dir`.
pub fn default_plan_path(dir: &Path) -> PathBuf {
    let filename = format!("plan_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
    dir.join(filename)
}
