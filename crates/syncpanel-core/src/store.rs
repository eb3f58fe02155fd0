//! Workbench store: sync folder, settings, and session state.
//!
//! [`WorkbenchStore`] is the seam the sync tab talks to. [`LocalWorkbench`]
//! implements it for a directory on the local filesystem: a "sync" pass
//! scans the folder and records totals, nothing is transferred.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use tokio::sync::broadcast;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::events::{StoreEvent, StoreEvents};
use crate::models::{FolderHandle, SyncSession, SyncSettings, SyncStatistics};
use crate::util::unix_timestamp_ms_now;

/// State and actions the sync tab needs from its host.
pub trait WorkbenchStore: Send + Sync {
    fn sync_folder(&self) -> Option<FolderHandle>;

    fn sync_settings(&self) -> SyncSettings;

    fn current_session(&self) -> Option<SyncSession>;

    /// Receive a [`StoreEvent`] for every later mutation.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;

    /// Select `handle` as the sync folder and start a new session.
    fn set_sync_folder(&self, handle: FolderHandle) -> impl Future<Output = Result<()>> + Send;

    /// Run one sync pass over the selected folder.
    fn sync_files(&self) -> impl Future<Output = Result<()>> + Send;

    fn save_sync_settings(&self, settings: SyncSettings) -> Result<()>;
}

/// Source of folder selections. [`Error::Cancelled`] means the user backed out.
pub trait FolderPicker: Send + Sync {
    fn pick_folder(&self) -> impl Future<Output = Result<FolderHandle>> + Send;
}

#[derive(Debug, Default)]
struct WorkbenchState {
    folder: Option<FolderHandle>,
    settings: SyncSettings,
    session: Option<SyncSession>,
}

/// [`WorkbenchStore`] over a local directory.
#[derive(Debug, Default)]
pub struct LocalWorkbench {
    state: RwLock<WorkbenchState>,
    events: StoreEvents,
    settings_path: Option<PathBuf>,
}

impl LocalWorkbench {
    /// Create an in-memory workbench with the given settings.
    pub fn new(settings: SyncSettings) -> Self {
        Self {
            state: RwLock::new(WorkbenchState {
                settings: settings.normalized(),
                ..WorkbenchState::default()
            }),
            events: StoreEvents::new(),
            settings_path: None,
        }
    }

    /// Create a workbench whose settings are loaded from and saved to
    /// `settings_path`. A missing file yields default settings.
    pub fn open(settings_path: impl Into<PathBuf>) -> Result<Self> {
        let settings_path = settings_path.into();
        let settings = load_settings(&settings_path)?;
        tracing::debug!(path = %settings_path.display(), ?settings, "Loaded sync settings");

        let mut workbench = Self::new(settings);
        workbench.settings_path = Some(settings_path);
        Ok(workbench)
    }

    fn read(&self) -> RwLockReadGuard<'_, WorkbenchState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, WorkbenchState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WorkbenchStore for LocalWorkbench {
    fn sync_folder(&self) -> Option<FolderHandle> {
        self.read().folder.clone()
    }

    fn sync_settings(&self) -> SyncSettings {
        self.read().settings
    }

    fn current_session(&self) -> Option<SyncSession> {
        self.read().session.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    async fn set_sync_folder(&self, handle: FolderHandle) -> Result<()> {
        ensure_directory(&handle.path)?;
        tracing::info!(folder = %handle.path.display(), "Sync folder selected");

        let session = SyncSession::new(unix_timestamp_ms_now());
        tracing::debug!(session = %session.id, "Sync session started");
        {
            let mut state = self.write();
            state.folder = Some(handle.clone());
            state.session = Some(session.clone());
        }

        self.events.publish(StoreEvent::FolderChanged(Some(handle)));
        self.events.publish(StoreEvent::SessionChanged(Some(session)));
        Ok(())
    }

    async fn sync_files(&self) -> Result<()> {
        let folder = self.sync_folder().ok_or(Error::NoFolderSelected)?;
        ensure_directory(&folder.path)?;

        let started = Instant::now();
        let root = folder.path.clone();
        let (total_files, total_size) = tokio::task::spawn_blocking(move || scan_folder(&root))
            .await
            .map_err(|error| Error::Io(std::io::Error::other(error)))?;

        let statistics = SyncStatistics {
            timestamp: unix_timestamp_ms_now(),
            total_files,
            total_size,
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            folder = %folder.path.display(),
            total_files,
            total_size,
            duration_ms = statistics.duration_ms,
            "Sync pass completed"
        );

        let session = {
            let mut state = self.write();
            let session = state
                .session
                .get_or_insert_with(|| SyncSession::new(statistics.timestamp));
            session.record(statistics);
            session.clone()
        };

        self.events.publish(StoreEvent::SessionChanged(Some(session)));
        Ok(())
    }

    fn save_sync_settings(&self, settings: SyncSettings) -> Result<()> {
        let settings = settings.normalized();
        if let Some(path) = &self.settings_path {
            save_settings(path, &settings)?;
        }
        self.write().settings = settings;

        tracing::debug!(?settings, "Sync settings saved");
        self.events.publish(StoreEvent::SettingsChanged(settings));
        Ok(())
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::FolderAccess {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        }),
        Err(error) => Err(Error::FolderAccess {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }),
    }
}

/// Count regular files under `root` and sum their sizes. Symlinks are not
/// followed, and entries that cannot be read are skipped.
fn scan_folder(root: &Path) -> (u64, u64) {
    let mut total_files = 0_u64;
    let mut total_size = 0_u64;

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!("Skipping unreadable entry: {error}");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let size = entry.metadata().map_or(0, |metadata| metadata.len());
        total_files += 1;
        total_size = total_size.saturating_add(size);
    }

    (total_files, total_size)
}

fn load_settings(path: &Path) -> Result<SyncSettings> {
    if !path.exists() {
        return Ok(SyncSettings::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str::<SyncSettings>(&raw)?;
    Ok(settings.normalized())
}

fn save_settings(path: &Path, settings: &SyncSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}
