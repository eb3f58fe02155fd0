//! Error types for syncpanel-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using syncpanel-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in syncpanel-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A sync was requested before any folder was selected
    #[error("No sync folder selected")]
    NoFolderSelected,

    /// The sync folder is missing or unreadable
    #[error("Cannot access sync folder {}: {reason}", path.display())]
    FolderAccess { path: PathBuf, reason: String },

    /// The user dismissed the folder picker
    #[error("Folder selection was cancelled")]
    Cancelled,
}

impl Error {
    /// Whether this error is a benign user cancellation rather than a failure.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
