//! Terminal folder picker.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use syncpanel_core::models::FolderHandle;
use syncpanel_core::util::normalize_text_option;
use syncpanel_core::{Error, FolderPicker, Result};

/// Picks the folder given on the command line, or asks for one on stdin.
///
/// An empty answer (or end of input) counts as a cancelled pick.
#[derive(Debug, Clone, Default)]
pub struct CliFolderPicker {
    path: Option<PathBuf>,
}

impl CliFolderPicker {
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FolderPicker for CliFolderPicker {
    async fn pick_folder(&self) -> Result<FolderHandle> {
        if let Some(path) = &self.path {
            return Ok(FolderHandle::from_path(path));
        }

        let answer = tokio::task::spawn_blocking(prompt_for_folder)
            .await
            .map_err(|error| Error::Io(io::Error::other(error)))??;
        parse_answer(answer)
    }
}

fn prompt_for_folder() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Sync folder (leave empty to cancel): ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

pub fn parse_answer(answer: String) -> Result<FolderHandle> {
    normalize_text_option(Some(answer))
        .map(FolderHandle::from_path)
        .ok_or(Error::Cancelled)
}
