use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{mpsc, watch};

use super::{SyncTab, SyncTabView};
use crate::models::SyncSettingsPatch;
use crate::refresh::{tick_if_running, RefreshTimer, LAST_SYNC_REFRESH_INTERVAL};
use crate::store::{FolderPicker, WorkbenchStore};
use crate::util::unix_timestamp_ms_now;

/// User actions wired from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTabCommand {
    SelectFolder,
    SyncNow,
    SaveSettings(SyncSettingsPatch),
}

/// Knobs for [`run`].
#[derive(Clone)]
pub struct RunOptions {
    pub refresh_period: Duration,
    /// Source of "now" in Unix ms for label formatting
    pub clock: Arc<dyn Fn() -> i64 + Send + Sync>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            refresh_period: LAST_SYNC_REFRESH_INTERVAL,
            clock: Arc::new(unix_timestamp_ms_now),
        }
    }
}

impl std::fmt::Debug for RunOptions {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RunOptions")
            .field("refresh_period", &self.refresh_period)
            .finish_non_exhaustive()
    }
}

/// Drive a [`SyncTab`] until `commands` closes or the store goes away.
///
/// Every change to the rendered view is published to `views`. While the
/// session has a sync time the label is recomputed every `refresh_period`;
/// the timer is dropped as soon as the sync time disappears and when this
/// function returns.
pub async fn run<S, P>(
    store: &S,
    picker: &P,
    mut commands: mpsc::Receiver<SyncTabCommand>,
    views: watch::Sender<SyncTabView>,
    options: RunOptions,
) where
    S: WorkbenchStore,
    P: FolderPicker,
{
    let now = || (options.clock)();
    let mut events = store.subscribe();
    let mut tab = SyncTab::from_store(store, now());
    let mut tracked = None;
    let mut timer: Option<RefreshTimer> = None;

    loop {
        track_last_sync(&tab, &mut tracked, &mut timer, options.refresh_period);
        publish_view(&views, &tab);

        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => tab.apply(event, now()),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Sync tab lagged behind store events, resyncing");
                    tab.resync(store, now());
                }
                Err(RecvError::Closed) => break,
            },
            () = tick_if_running(&mut timer) => tab.update_last_sync_time(now()),
            command = commands.recv() => match command {
                Some(SyncTabCommand::SelectFolder) => {
                    tab.handle_select_folder(store, picker).await;
                }
                Some(SyncTabCommand::SyncNow) => {
                    if tab.begin_manual_sync() {
                        publish_view(&views, &tab);
                        let result = store.sync_files().await;
                        tab.finish_manual_sync(store, result, now());
                    }
                }
                Some(SyncTabCommand::SaveSettings(patch)) => tab.handle_save_settings(store, patch),
                None => break,
            },
        }
    }

    tracing::debug!("Sync tab closed");
}

/// Send the rendered view, waking receivers only when it differs.
fn publish_view(views: &watch::Sender<SyncTabView>, tab: &SyncTab) {
    views.send_if_modified(|current| {
        let next = tab.view();
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

/// Restart the timer when the sync time changes; stop it when there is none.
fn track_last_sync(
    tab: &SyncTab,
    tracked: &mut Option<i64>,
    timer: &mut Option<RefreshTimer>,
    period: Duration,
) {
    let last_sync = tab.last_sync();
    if last_sync == *tracked {
        return;
    }
    *tracked = last_sync;
    *timer = last_sync.map(|_| RefreshTimer::start(period));
}
