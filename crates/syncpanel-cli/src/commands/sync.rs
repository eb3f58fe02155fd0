use syncpanel_core::util::unix_timestamp_ms_now;
use syncpanel_core::{SyncTab, SyncTabView, WorkbenchStore};

use crate::commands::common::{open_workbench, print_view};
use crate::config::ConfigPaths;
use crate::error::CliError;

pub async fn run_sync(as_json: bool, paths: &ConfigPaths) -> Result<(), CliError> {
    let view = sync_once(paths).await?;
    print_view(&view, as_json)
}

/// Run one sync pass over the configured folder and render the panel.
pub async fn sync_once(paths: &ConfigPaths) -> Result<SyncTabView, CliError> {
    let workbench = open_workbench(paths).await?;
    if workbench.sync_folder().is_none() {
        return Err(CliError::FolderNotConfigured);
    }

    workbench.sync_files().await?;
    Ok(SyncTab::from_store(&workbench, unix_timestamp_ms_now()).view())
}
