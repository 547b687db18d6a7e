//! File system utilities.

use std::path::Path;

/// Extensions identified as video.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "mov", "avi", "webm", "wmv", "mpg", "mpeg",
];

/// Extensions recognised as music. These are detected but never identified.
const MUSIC_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "3pg", "aac", "alac", "opus", "ogg", "wav", "wmv", "ape",
];

fn normalize_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Check if an extension (with or without leading dot) is a video format.
///
/// Matching is exact, so `.MKV` is not a video extension.
pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&normalize_extension(ext))
}

/// Check if an extension (with or without leading dot) is a music format.
pub fn is_music_extension(ext: &str) -> bool {
    MUSIC_EXTENSIONS.contains(&normalize_extension(ext))
}

/// Check if a file is a video file based on extension.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_video_extension)
        .unwrap_or(false)
}
