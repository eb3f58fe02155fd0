use std::path::PathBuf;

use syncpanel_core::models::FolderHandle;
use syncpanel_core::sync_tab::{SyncStatus, SyncTabView};
use syncpanel_core::{LocalWorkbench, WorkbenchStore};

use crate::config::{CliConfig, ConfigPaths};
use crate::error::CliError;

/// Open the workbench with persisted settings and, when one is configured,
/// the saved sync folder already selected.
pub async fn open_workbench(paths: &ConfigPaths) -> Result<LocalWorkbench, CliError> {
    let workbench = LocalWorkbench::open(&paths.settings_file)?;
    if let Some(folder) = configured_folder(paths)? {
        workbench
            .set_sync_folder(FolderHandle::from_path(folder))
            .await?;
    }
    Ok(workbench)
}

pub fn configured_folder(paths: &ConfigPaths) -> Result<Option<PathBuf>, CliError> {
    Ok(CliConfig::load_from_path(&paths.config_file)?.sync_folder)
}

/// Text rendering of the sync panel, one line per row.
pub fn render_view_lines(view: &SyncTabView) -> Vec<String> {
    let status = match view.status {
        SyncStatus::Idle => "idle",
        SyncStatus::Syncing => "syncing",
    };

    let mut lines = vec![format!("Sync Controls [{status}]")];
    if let Some(last_synced) = &view.last_synced {
        lines.push(format!("  {last_synced}"));
    }

    let mut folder_line = format!("  Folder: {}", view.folder_label);
    if let (Some(files), Some(size)) = (&view.files_label, &view.size_label) {
        folder_line.push_str(&format!("  |  {files}  |  {size}"));
    }
    lines.push(folder_line);

    lines.push(format!(
        "  Auto-sync: {}",
        if view.show_interval {
            format!("on, every {} minutes", view.settings.auto_sync_interval)
        } else {
            "off".to_string()
        }
    ));
    lines.push(format!(
        "  Sync on save: {}",
        on_off(view.settings.sync_on_save)
    ));
    lines
}

pub const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

pub fn print_view(view: &SyncTabView, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string(view)?);
    } else {
        for line in render_view_lines(view) {
            println!("{line}");
        }
    }
    Ok(())
}
