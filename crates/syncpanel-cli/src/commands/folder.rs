use syncpanel_core::{FolderPicker, LocalWorkbench, WorkbenchStore};

use crate::cli::FolderCommands;
use crate::commands::common::configured_folder;
use crate::config::{CliConfig, ConfigPaths};
use crate::error::CliError;
use crate::picker::CliFolderPicker;

pub async fn run_folder(command: FolderCommands, paths: &ConfigPaths) -> Result<(), CliError> {
    match command {
        FolderCommands::Set { path } => {
            select_folder(&CliFolderPicker::new(path), paths).await?;
            Ok(())
        }
        FolderCommands::Show => {
            match configured_folder(paths)? {
                Some(folder) => println!("{}", folder.display()),
                None => println!("No folder selected"),
            }
            Ok(())
        }
    }
}

/// Pick a folder, validate it through the workbench, and remember it.
///
/// Returns `false` when the pick was cancelled.
pub async fn select_folder<P: FolderPicker>(
    picker: &P,
    paths: &ConfigPaths,
) -> Result<bool, CliError> {
    let handle = match picker.pick_folder().await {
        Ok(handle) => handle,
        Err(error) if error.is_cancelled() => {
            println!("Folder selection cancelled");
            return Ok(false);
        }
        Err(error) => return Err(error.into()),
    };

    let workbench = LocalWorkbench::open(&paths.settings_file)?;
    workbench.set_sync_folder(handle.clone()).await?;

    let mut config = CliConfig::load_from_path(&paths.config_file)?;
    config.sync_folder = Some(handle.path.clone());
    config.save_to_path(&paths.config_file)?;

    println!("Sync folder set to {} ({})", handle.name, handle.path.display());
    Ok(true)
}
