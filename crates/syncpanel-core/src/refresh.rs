//! Periodic refresh of time-relative labels.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// How often the "last synced" label is recomputed while a sync time exists.
pub const LAST_SYNC_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// A running periodic timer.
///
/// The timer exists only while the value is alive: hold it in an `Option`
/// next to the state that needs it and set that to `None` (or let it go out
/// of scope) to stop ticking.
#[derive(Debug)]
pub struct RefreshTimer {
    interval: Interval,
    period: Duration,
}

impl RefreshTimer {
    /// Start a timer whose first tick fires one `period` from now.
    pub fn start(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(?period, "Refresh timer started");
        Self { interval, period }
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        tracing::debug!(period = ?self.period, "Refresh timer stopped");
    }
}

/// Wait for the next tick of `timer`, or forever when there is none.
///
/// Lets a `select!` loop keep a timer branch that is only live while the
/// timer is held.
pub async fn tick_if_running(timer: &mut Option<RefreshTimer>) {
    match timer {
        Some(timer) => timer.tick().await,
        None => std::future::pending().await,
    }
}
