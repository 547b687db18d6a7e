//! Candidate collection module.
//!
//! Turns a path given on the command line into the list of files that should
//! be identified. Only regular files are returned; video files smaller than
//! the configured minimum are skipped.

use crate::utils::fs::is_video_file;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the files under `path` that should be identified.
///
/// # Arguments
/// * `path` - A single file or a directory
/// * `recursive` - Walk subdirectories instead of only direct children
/// * `min_file_size` - Video files below this many bytes are skipped
///
/// # Returns
/// Candidate paths sorted for consistent output.
pub fn collect_candidates(path: &Path, recursive: bool, min_file_size: u64) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }

    if path.is_file() {
        return Ok(if passes_size_check(path, min_file_size) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut candidates = Vec::new();
    let mut total_files_scanned = 0usize;

    for entry in WalkDir::new(path)
        .follow_links(false)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        total_files_scanned += 1;

        let entry_path = entry.path();
        if passes_size_check(entry_path, min_file_size) {
            candidates.push(entry_path.to_path_buf());
        }
    }

    candidates.sort();

    tracing::info!(
        "Scanned {} files in {:?}: {} candidates",
        total_files_scanned,
        path,
        candidates.len()
    );

    Ok(candidates)
}

/// Whether a file is large enough to be worth identifying.
///
/// Only video files are size checked; anything else passes.
fn passes_size_check(path: &Path, min_file_size: u64) -> bool {
    if min_file_size == 0 || !is_video_file(path) {
        return true;
    }

    match std::fs::metadata(path) {
        Ok(metadata) if metadata.len() < min_file_size => {
            tracing::warn!(
                "Skipping {:?}: {} bytes is below the minimum of {} bytes",
                path,
                metadata.len(),
                min_file_size
            );
            false
        }
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Failed to read file size of {:?}: {}", path, e);
            false
        }
    }
}
