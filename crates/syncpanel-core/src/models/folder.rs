//! Sync folder handle

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

/// A directory chosen as the sync target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderHandle {
    /// Display name (last path component)
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
}

impl FolderHandle {
    /// Build a handle whose name is the last component of `path`.
    ///
    /// Falls back to the full path when there is no usable file name
    /// (for example `/`).
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { name, path }
    }
}

fn display_name(path: &Path) -> String {
    normalize_text_option(
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned()),
    )
    .unwrap_or_else(|| path.display().to_string())
}
