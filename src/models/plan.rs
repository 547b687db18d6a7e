//! Plan data model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plan file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    /// Plan version.
    pub version: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Path the candidates were collected from.
    pub source_path: PathBuf,
    /// Action every operation uses.
    pub action: Action,
    /// Planned operations, in candidate order.
    pub operations: Vec<PlannedOperation>,
    /// Video files that could not be classified.
    pub unresolved: Vec<PathBuf>,
}

/// What should happen to a source file. Plans only describe the action,
/// nothing here touches the filesystem.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Rename in place, keeping the source directory.
    #[default]
    Rename,
    Symlink,
    Hardlink,
    Copy,
    Move,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Rename => write!(f, "rename"),
            Action::Symlink => write!(f, "symlink"),
            Action::Hardlink => write!(f, "hardlink"),
            Action::Copy => write!(f, "copy"),
            Action::Move => write!(f, "move"),
        }
    }
}

/// A single planned operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedOperation {
    /// File as found on disk.
    pub source_path: PathBuf,
    /// Where the file should end up.
    pub target_path: PathBuf,
    /// Operation type.
    pub action: Action,
    pub is_movie: bool,
    pub is_series: bool,
}
