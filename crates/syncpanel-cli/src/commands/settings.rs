use syncpanel_core::models::{SyncSettings, SyncSettingsPatch};
use syncpanel_core::{LocalWorkbench, WorkbenchStore};

use crate::cli::SettingsCommands;
use crate::commands::common::on_off;
use crate::config::ConfigPaths;
use crate::error::CliError;

pub fn run_settings(command: SettingsCommands, paths: &ConfigPaths) -> Result<(), CliError> {
    let workbench = LocalWorkbench::open(&paths.settings_file)?;

    match command {
        SettingsCommands::Show { json } => print_settings(&workbench.sync_settings(), json),
        SettingsCommands::Set {
            auto_sync,
            interval,
            sync_on_save,
        } => {
            let patch = SyncSettingsPatch {
                auto_sync,
                auto_sync_interval: interval,
                sync_on_save,
            };
            let settings = apply_settings_patch(&workbench, patch)?;
            tracing::debug!(path = %paths.settings_file.display(), "Settings updated");
            print_settings(&settings, false)
        }
    }
}

/// Merge `patch` over the stored settings and save the result.
pub fn apply_settings_patch<S: WorkbenchStore>(
    store: &S,
    patch: SyncSettingsPatch,
) -> Result<SyncSettings, CliError> {
    if patch.is_empty() {
        return Err(CliError::EmptySettingsPatch);
    }

    let settings = store.sync_settings().merged(patch);
    store.save_sync_settings(settings)?;
    Ok(settings)
}

pub fn render_settings_lines(settings: &SyncSettings) -> Vec<String> {
    vec![
        format!("auto-sync:     {}", on_off(settings.auto_sync)),
        format!("interval:      {} minutes", settings.auto_sync_interval),
        format!("sync-on-save:  {}", on_off(settings.sync_on_save)),
    ]
}

fn print_settings(settings: &SyncSettings, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        for line in render_settings_lines(settings) {
            println!("{line}");
        }
    }
    Ok(())
}
