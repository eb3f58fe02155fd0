use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] syncpanel_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No sync folder configured. Run `syncpanel folder set <PATH>` first.")]
    FolderNotConfigured,
    #[error("Nothing to change; pass --auto-sync, --interval, or --sync-on-save")]
    EmptySettingsPatch,
}
