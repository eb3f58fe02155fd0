//! Sync settings tab: display state derived from the workbench store.
//!
//! [`SyncTab`] mirrors the store slices it renders, keeps the formatted
//! labels current, and turns user actions into store calls. [`run`] drives
//! it from store events, UI commands, and the refresh timer.

mod runner;

pub use runner::{run, RunOptions, SyncTabCommand};

use serde::Serialize;

use crate::error::Result;
use crate::events::StoreEvent;
use crate::format::{format_file_size, format_last_sync};
use crate::models::{FolderHandle, SyncSession, SyncSettings, SyncSettingsPatch};
use crate::store::{FolderPicker, WorkbenchStore};
use crate::util::unix_timestamp_ms_now;

/// Whether a manual sync is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Idle,
    Syncing,
}

/// The "Sync Now" button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncButton {
    pub label: String,
    pub disabled: bool,
}

/// Everything the UI layer needs to draw the tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncTabView {
    pub status: SyncStatus,
    pub folder_label: String,
    pub folder_button: String,
    /// Present only once a folder is selected
    pub sync_button: Option<SyncButton>,
    /// "Last synced ..." line, present with a folder and a known sync time
    pub last_synced: Option<String>,
    pub files_label: Option<String>,
    pub size_label: Option<String>,
    pub settings: SyncSettings,
    /// The interval editor is shown only while auto-sync is on
    pub show_interval: bool,
}

/// View model for the sync settings tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncTab {
    folder: Option<FolderHandle>,
    settings: SyncSettings,
    session: Option<SyncSession>,
    last_sync_time: String,
    total_files: u64,
    total_size: u64,
    is_manual_syncing: bool,
}

impl SyncTab {
    /// Seed the tab from the store's current state.
    pub fn from_store<S: WorkbenchStore>(store: &S, now_ms: i64) -> Self {
        let mut tab = Self {
            folder: store.sync_folder(),
            settings: store.sync_settings(),
            session: store.current_session(),
            ..Self::default()
        };
        tab.refresh_session_labels(now_ms);
        tab
    }

    /// Apply a store change.
    pub fn apply(&mut self, event: StoreEvent, now_ms: i64) {
        match event {
            StoreEvent::FolderChanged(folder) => self.folder = folder,
            StoreEvent::SettingsChanged(settings) => self.settings = settings,
            StoreEvent::SessionChanged(session) => {
                self.session = session;
                self.refresh_session_labels(now_ms);
            }
        }
    }

    /// Re-read everything from the store, e.g. after missing events.
    pub fn resync<S: WorkbenchStore>(&mut self, store: &S, now_ms: i64) {
        let is_manual_syncing = self.is_manual_syncing;
        *self = Self::from_store(store, now_ms);
        self.is_manual_syncing = is_manual_syncing;
    }

    /// Recompute the "last synced" label against `now_ms`.
    ///
    /// The label is empty while the session has no sync time.
    pub fn update_last_sync_time(&mut self, now_ms: i64) {
        self.last_sync_time = self
            .last_sync()
            .map(|last_sync| format_last_sync(last_sync, now_ms))
            .unwrap_or_default();
    }

    /// Copy totals from the latest statistics entry. Totals are kept as-is
    /// when the session has no statistics.
    pub fn update_sync_stats(&mut self) {
        if let Some(latest) = self
            .session
            .as_ref()
            .and_then(SyncSession::latest_statistics)
        {
            self.total_files = latest.total_files;
            self.total_size = latest.total_size;
        }
    }

    fn refresh_session_labels(&mut self, now_ms: i64) {
        self.update_sync_stats();
        self.update_last_sync_time(now_ms);
    }

    /// Sync time that drives the refresh timer.
    pub fn last_sync(&self) -> Option<i64> {
        self.session.as_ref().and_then(|session| session.last_sync)
    }

    pub fn needs_refresh_timer(&self) -> bool {
        self.last_sync().is_some()
    }

    pub fn last_sync_time(&self) -> &str {
        &self.last_sync_time
    }

    pub const fn total_files(&self) -> u64 {
        self.total_files
    }

    pub const fn total_size(&self) -> u64 {
        self.total_size
    }

    pub const fn is_manual_syncing(&self) -> bool {
        self.is_manual_syncing
    }

    pub const fn folder(&self) -> Option<&FolderHandle> {
        self.folder.as_ref()
    }

    pub const fn settings(&self) -> SyncSettings {
        self.settings
    }

    /// Ask `picker` for a folder and hand it to the store.
    ///
    /// A cancelled pick is ignored; other failures are logged.
    pub async fn handle_select_folder<S, P>(&mut self, store: &S, picker: &P)
    where
        S: WorkbenchStore,
        P: FolderPicker,
    {
        let handle = match picker.pick_folder().await {
            Ok(handle) => handle,
            Err(error) if error.is_cancelled() => {
                tracing::debug!("Folder selection cancelled");
                return;
            }
            Err(error) => {
                tracing::error!("Failed to select sync folder: {error}");
                return;
            }
        };

        match store.set_sync_folder(handle.clone()).await {
            Ok(()) => self.folder = Some(handle),
            Err(error) => tracing::error!("Failed to select sync folder: {error}"),
        }
    }

    /// Run a sync now. Does nothing without a folder or while one is running.
    pub async fn handle_manual_sync<S: WorkbenchStore>(&mut self, store: &S) {
        if !self.begin_manual_sync() {
            return;
        }
        let result = store.sync_files().await;
        self.finish_manual_sync(store, result, unix_timestamp_ms_now());
    }

    /// Mark a manual sync as started. Returns `false` when it must not run.
    pub fn begin_manual_sync(&mut self) -> bool {
        if self.folder.is_none() || self.is_manual_syncing {
            return false;
        }
        self.is_manual_syncing = true;
        true
    }

    /// Settle a manual sync started with [`Self::begin_manual_sync`].
    ///
    /// On success the labels are refreshed from the store right away instead
    /// of waiting for the session event.
    pub fn finish_manual_sync<S: WorkbenchStore>(
        &mut self,
        store: &S,
        result: Result<()>,
        now_ms: i64,
    ) {
        match result {
            Ok(()) => {
                self.session = store.current_session();
                self.refresh_session_labels(now_ms);
            }
            Err(error) => tracing::error!("Manual sync error: {error}"),
        }
        self.is_manual_syncing = false;
    }

    /// Merge `patch` over the current settings and save them.
    pub fn handle_save_settings<S: WorkbenchStore>(&mut self, store: &S, patch: SyncSettingsPatch) {
        let settings = self.settings.merged(patch);
        match store.save_sync_settings(settings) {
            Ok(()) => self.settings = settings,
            Err(error) => tracing::error!("Failed to save sync settings: {error}"),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> SyncTabView {
        let folder = self.folder.as_ref();

        SyncTabView {
            status: if self.is_manual_syncing {
                SyncStatus::Syncing
            } else {
                SyncStatus::Idle
            },
            folder_label: folder.map_or_else(
                || "No folder selected".to_string(),
                |folder| folder.name.clone(),
            ),
            folder_button: if folder.is_some() {
                "Change Folder"
            } else {
                "Select Folder"
            }
            .to_string(),
            sync_button: folder.map(|_| SyncButton {
                label: if self.is_manual_syncing {
                    "Syncing..."
                } else {
                    "Sync Now"
                }
                .to_string(),
                disabled: self.is_manual_syncing,
            }),
            last_synced: folder
                .filter(|_| !self.last_sync_time.is_empty())
                .map(|_| format!("Last synced {}", self.last_sync_time)),
            files_label: folder.map(|_| format!("{} files", self.total_files)),
            size_label: folder.map(|_| format_file_size(self.total_size)),
            settings: self.settings,
            show_interval: self.settings.auto_sync,
        }
    }
}
