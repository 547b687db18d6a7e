//! Integration tests for the scanner module.
//!
//! Tests cover:
//! - Recursive and flat collection
//! - Minimum file size filtering
//! - Error handling for non-existent paths

use media_renamer::core::scanner::collect_candidates;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![0u8; size]).unwrap();
}

#[test]
fn test_collect_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = collect_candidates(temp_dir.path(), true, 0).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_collect_recursive() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("Angel.S04E12.mkv"), 10);
    write_file(&temp_dir.path().join("Show.S01E01").join("random.mkv"), 10);
    write_file(&temp_dir.path().join("notes.txt"), 10);

    let result = collect_candidates(temp_dir.path(), true, 0).unwrap();

    assert_eq!(result.len(), 3);
    assert!(result.contains(&temp_dir.path().join("Show.S01E01").join("random.mkv")));
}

#[test]
fn test_collect_direct_children_only() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("Angel.S04E12.mkv"), 10);
    write_file(&temp_dir.path().join("nested").join("Heat.1995.mkv"), 10);

    let result = collect_candidates(temp_dir.path(), false, 0).unwrap();

    assert_eq!(result, vec![temp_dir.path().join("Angel.S04E12.mkv")]);
}

#[test]
fn test_collect_skips_small_videos() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("small.S01E01.mkv"), 10);
    write_file(&temp_dir.path().join("large.S01E02.mkv"), 2_000);
    // Non-video files are never size checked.
    write_file(&temp_dir.path().join("small.srt"), 10);

    let result = collect_candidates(temp_dir.path(), true, 1_000).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.contains(&temp_dir.path().join("large.S01E02.mkv")));
    assert!(result.contains(&temp_dir.path().join("small.srt")));
}

#[test]
fn test_collect_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("The.Matrix-1999.mkv");
    write_file(&file, 10);

    assert_eq!(collect_candidates(&file, true, 0).unwrap(), vec![file.clone()]);
    assert!(collect_candidates(&file, true, 1_000).unwrap().is_empty());
}

#[test]
fn test_collect_results_are_sorted() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("b.mkv"), 1);
    write_file(&temp_dir.path().join("a.mkv"), 1);
    write_file(&temp_dir.path().join("c.mkv"), 1);

    let result = collect_candidates(temp_dir.path(), true, 0).unwrap();
    let mut sorted = result.clone();
    sorted.sort();
    assert_eq!(result, sorted);
}

#[test]
fn test_collect_nonexistent_path() {
    let result = collect_candidates(Path::new("/nonexistent/path/for/sure"), true, 0);
    assert!(matches!(result, Err(media_renamer::Error::PathNotFound(_))));
}
