//! Store change notifications.
//!
//! The workbench store publishes a [`StoreEvent`] after every mutation over a
//! `tokio::sync::broadcast` channel. Views call [`StoreEvents::subscribe`] and
//! `select!` on the receiver alongside their own timers.

use tokio::sync::broadcast;

use crate::models::{FolderHandle, SyncSession, SyncSettings};

pub(crate) const EVENT_CAPACITY: usize = 64;

/// A change to one slice of workbench state, carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FolderChanged(Option<FolderHandle>),
    SettingsChanged(SyncSettings),
    SessionChanged(Option<SyncSession>),
}

/// Fan-out channel for [`StoreEvent`]s.
#[derive(Debug, Clone)]
pub struct StoreEvents {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    /// Get a receiver for every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: StoreEvent) {
        let delivered = self.tx.send(event).unwrap_or(0);
        tracing::trace!(delivered, "store event published");
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let events = StoreEvents::new();
        let mut rx1 = events.subscribe();
        let mut rx2 = events.subscribe();

        events.publish(StoreEvent::SettingsChanged(SyncSettings::default()));

        assert_eq!(
            rx1.recv().await.unwrap(),
            StoreEvent::SettingsChanged(SyncSettings::default())
        );
        assert_eq!(
            rx2.recv().await.unwrap(),
            StoreEvent::SettingsChanged(SyncSettings::default())
        );
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_silent() {
        let events = StoreEvents::new();
        events.publish(StoreEvent::SessionChanged(None));

        let mut rx = events.subscribe();
        events.publish(StoreEvent::FolderChanged(None));
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::FolderChanged(None));
    }

    #[tokio::test]
    async fn late_subscriber_misses_earlier_events() {
        let events = StoreEvents::new();
        events.publish(StoreEvent::FolderChanged(None));
        let mut rx = events.subscribe();
        events.publish(StoreEvent::SessionChanged(None));

        assert_eq!(rx.recv().await.unwrap(), StoreEvent::SessionChanged(None));
    }
}
