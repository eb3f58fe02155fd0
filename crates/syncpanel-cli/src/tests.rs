use std::path::Path;
use std::time::Duration;

use clap::Parser;
use pretty_assertions::assert_eq;
use syncpanel_core::models::{SyncSettings, SyncSettingsPatch};
use syncpanel_core::sync_tab::{SyncButton, SyncStatus, SyncTabCommand, SyncTabView};
use syncpanel_core::{LocalWorkbench, WorkbenchStore};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::cli::{Cli, Commands, CompletionShell, FolderCommands, SettingsCommands};
use crate::commands::common::render_view_lines;
use crate::commands::completions::completion_script;
use crate::commands::folder::select_folder;
use crate::commands::format::render_time;
use crate::commands::settings::{apply_settings_patch, render_settings_lines};
use crate::commands::sync::sync_once;
use crate::commands::watch::spawn_auto_sync;
use crate::config::{CliConfig, ConfigPaths};
use crate::error::CliError;
use crate::picker::{parse_answer, CliFolderPicker};

// 2024-03-09 14:05:07 UTC
const SYNCED_AT: i64 = 1_709_993_107_000;

fn temp_paths(dir: &Path) -> ConfigPaths {
    ConfigPaths::for_config_file(dir.join("config").join("config.json"))
}

fn folder_view() -> SyncTabView {
    SyncTabView {
        status: SyncStatus::Idle,
        folder_label: "site".to_string(),
        folder_button: "Change Folder".to_string(),
        sync_button: Some(SyncButton {
            label: "Sync Now".to_string(),
            disabled: false,
        }),
        last_synced: Some("Last synced 14:05:07 (2m ago)".to_string()),
        files_label: Some("12 files".to_string()),
        size_label: Some("1.5 KB".to_string()),
        settings: SyncSettings {
            auto_sync: true,
            auto_sync_interval: 15,
            sync_on_save: false,
        },
        show_interval: true,
    }
}

#[test]
fn render_time_in_utc() {
    assert_eq!(render_time(SYNCED_AT, SYNCED_AT + 120_000, true), "14:05:07 (2m ago)");
    assert_eq!(render_time(SYNCED_AT, SYNCED_AT + 30_000, true), "14:05:07");
}

#[test]
fn render_view_lines_with_folder() {
    assert_eq!(
        render_view_lines(&folder_view()),
        vec![
            "Sync Controls [idle]".to_string(),
            "  Last synced 14:05:07 (2m ago)".to_string(),
            "  Folder: site  |  12 files  |  1.5 KB".to_string(),
            "  Auto-sync: on, every 15 minutes".to_string(),
            "  Sync on save: off".to_string(),
        ]
    );
}

#[test]
fn render_view_lines_without_folder() {
    let view = SyncTabView {
        folder_label: "No folder selected".to_string(),
        folder_button: "Select Folder".to_string(),
        sync_button: None,
        last_synced: None,
        files_label: None,
        size_label: None,
        settings: SyncSettings::default(),
        show_interval: false,
        ..folder_view()
    };

    assert_eq!(
        render_view_lines(&view),
        vec![
            "Sync Controls [idle]".to_string(),
            "  Folder: No folder selected".to_string(),
            "  Auto-sync: off".to_string(),
            "  Sync on save: off".to_string(),
        ]
    );
}

#[test]
fn render_settings_lines_lists_every_field() {
    let lines = render_settings_lines(&SyncSettings::default());
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("5 minutes"));
}

#[test]
fn apply_settings_patch_rejects_empty_patch() {
    let workbench = LocalWorkbench::default();
    let error = apply_settings_patch(&workbench, SyncSettingsPatch::default()).unwrap_err();
    assert!(matches!(error, CliError::EmptySettingsPatch));
}

#[test]
fn apply_settings_patch_persists_merge() {
    let dir = tempfile::tempdir().unwrap();
    let paths = temp_paths(dir.path());
    let workbench = LocalWorkbench::open(&paths.settings_file).unwrap();

    let settings = apply_settings_patch(
        &workbench,
        SyncSettingsPatch {
            auto_sync: Some(true),
            auto_sync_interval: Some(30),
            ..SyncSettingsPatch::default()
        },
    )
    .unwrap();

    assert_eq!(
        settings,
        SyncSettings {
            auto_sync: true,
            auto_sync_interval: 30,
            sync_on_save: false,
        }
    );
    let reopened = LocalWorkbench::open(&paths.settings_file).unwrap();
    assert_eq!(reopened.sync_settings(), settings);
}

#[test]
fn parse_answer_treats_blank_as_cancel() {
    assert!(parse_answer("  \n".to_string()).unwrap_err().is_cancelled());
    assert_eq!(
        parse_answer("/work/site\n".to_string()).unwrap().name,
        "site"
    );
}

#[tokio::test]
async fn select_folder_saves_config() {
    let dir = tempfile::tempdir().unwrap();
    let paths = temp_paths(dir.path());
    let folder = dir.path().join("site");
    std::fs::create_dir(&folder).unwrap();

    let selected = select_folder(&CliFolderPicker::new(Some(folder.clone())), &paths)
        .await
        .unwrap();

    assert!(selected);
    assert_eq!(
        CliConfig::load_from_path(&paths.config_file)
            .unwrap()
            .sync_folder,
        Some(folder)
    );
}

#[tokio::test]
async fn select_folder_rejects_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let paths = temp_paths(dir.path());

    let error = select_folder(
        &CliFolderPicker::new(Some(dir.path().join("missing"))),
        &paths,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        error,
        CliError::Core(syncpanel_core::Error::FolderAccess { .. })
    ));
    assert!(!paths.config_file.exists());
}

#[tokio::test]
async fn sync_once_requires_folder() {
    let dir = tempfile::tempdir().unwrap();
    let error = sync_once(&temp_paths(dir.path())).await.unwrap_err();
    assert!(matches!(error, CliError::FolderNotConfigured));
}

#[tokio::test]
async fn sync_once_reports_folder_totals() {
    let dir = tempfile::tempdir().unwrap();
    let paths = temp_paths(dir.path());
    let folder = dir.path().join("site");
    std::fs::create_dir(&folder).unwrap();
    std::fs::write(folder.join("index.html"), vec![b'a'; 1024]).unwrap();
    std::fs::write(folder.join("style.css"), vec![b'b'; 512]).unwrap();

    select_folder(&CliFolderPicker::new(Some(folder)), &paths)
        .await
        .unwrap();
    let view = sync_once(&paths).await.unwrap();

    assert_eq!(view.folder_label, "site");
    assert_eq!(view.files_label.as_deref(), Some("2 files"));
    assert_eq!(view.size_label.as_deref(), Some("1.5 KB"));
    assert!(view
        .last_synced
        .as_deref()
        .is_some_and(|label| label.starts_with("Last synced ")));
}

#[test]
fn cli_parses_settings_set() {
    let cli = Cli::parse_from([
        "syncpanel",
        "settings",
        "set",
        "--auto-sync",
        "true",
        "--interval",
        "10",
    ]);
    let Commands::Settings {
        command:
            SettingsCommands::Set {
                auto_sync,
                interval,
                sync_on_save,
            },
    } = cli.command
    else {
        panic!("expected settings set");
    };
    assert_eq!(auto_sync, Some(true));
    assert_eq!(interval, Some(10));
    assert_eq!(sync_on_save, None);
}

#[test]
fn cli_rejects_out_of_range_interval() {
    assert!(Cli::try_parse_from(["syncpanel", "settings", "set", "--interval", "0"]).is_err());
    assert!(Cli::try_parse_from(["syncpanel", "settings", "set", "--interval", "61"]).is_err());
}

#[test]
fn cli_parses_folder_set_without_path() {
    let cli = Cli::parse_from(["syncpanel", "folder", "set"]);
    assert!(matches!(
        cli.command,
        Commands::Folder {
            command: FolderCommands::Set { path: None }
        }
    ));
}

#[test]
fn completion_script_names_binary() {
    let script = String::from_utf8(completion_script(CompletionShell::Bash)).unwrap();
    assert!(script.contains("syncpanel"));
}

#[tokio::test(start_paused = true)]
async fn auto_sync_requests_sync_once_per_period() {
    let (command_tx, mut command_rx) = mpsc::channel(4);
    let started = Instant::now();
    let handle = spawn_auto_sync(command_tx, Duration::from_secs(300));

    assert_eq!(command_rx.recv().await, Some(SyncTabCommand::SyncNow));
    assert_eq!(started.elapsed(), Duration::from_secs(300));
    assert_eq!(command_rx.recv().await, Some(SyncTabCommand::SyncNow));
    assert_eq!(started.elapsed(), Duration::from_secs(600));

    drop(command_rx);
    handle.await.unwrap();
}
