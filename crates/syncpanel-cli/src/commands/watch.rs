use std::time::Duration;

use syncpanel_core::sync_tab::{run, RunOptions, SyncTabCommand};
use syncpanel_core::util::unix_timestamp_ms_now;
use syncpanel_core::{SyncTab, WorkbenchStore};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::commands::common::{open_workbench, print_view};
use crate::config::ConfigPaths;
use crate::error::CliError;
use crate::picker::CliFolderPicker;

const COMMAND_BUFFER: usize = 8;

pub async fn run_watch(
    max_updates: Option<usize>,
    as_json: bool,
    paths: &ConfigPaths,
) -> Result<(), CliError> {
    let workbench = open_workbench(paths).await?;
    let settings = workbench.sync_settings();

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (view_tx, mut view_rx) =
        watch::channel(SyncTab::from_store(&workbench, unix_timestamp_ms_now()).view());

    let auto_sync = settings.auto_sync.then(|| {
        tracing::info!(
            minutes = settings.auto_sync_interval,
            "Auto-sync enabled"
        );
        spawn_auto_sync(
            command_tx.clone(),
            Duration::from_secs(u64::from(settings.auto_sync_interval) * 60),
        )
    });

    let picker = CliFolderPicker::default();
    let tab = run(
        &workbench,
        &picker,
        command_rx,
        view_tx,
        RunOptions::default(),
    );

    let printer = async {
        let mut printed = 0_usize;
        loop {
            let view = view_rx.borrow_and_update().clone();
            print_view(&view, as_json)?;
            if !as_json {
                println!();
            }

            printed += 1;
            if max_updates.is_some_and(|max| printed >= max) || view_rx.changed().await.is_err() {
                break;
            }
        }
        Ok::<(), CliError>(())
    };

    let result = tokio::select! {
        () = tab => Ok(()),
        result = printer => result,
        signal = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, closing sync panel");
            signal.map_err(CliError::from)
        }
    };

    drop(command_tx);
    if let Some(handle) = auto_sync {
        handle.abort();
    }
    result
}

/// Request a sync every `period` until the panel stops listening.
pub fn spawn_auto_sync(commands: mpsc::Sender<SyncTabCommand>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            tracing::debug!("Auto-sync tick");
            if commands.send(SyncTabCommand::SyncNow).await.is_err() {
                break;
            }
        }
    })
}
