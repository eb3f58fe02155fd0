//! Sync settings model

use serde::{Deserialize, Serialize};

/// Smallest accepted auto-sync interval, in minutes.
pub const MIN_AUTO_SYNC_INTERVAL: u32 = 1;
/// Largest accepted auto-sync interval, in minutes.
pub const MAX_AUTO_SYNC_INTERVAL: u32 = 60;

/// Folder sync settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSettings {
    /// Run a sync automatically every `auto_sync_interval` minutes
    pub auto_sync: bool,
    /// Auto-sync period in minutes (1..=60)
    pub auto_sync_interval: u32,
    /// Sync whenever a file is saved
    pub sync_on_save: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            auto_sync: false,
            auto_sync_interval: 5,
            sync_on_save: false,
        }
    }
}

impl SyncSettings {
    /// Return a copy with `patch` applied over these settings.
    #[must_use]
    pub fn merged(self, patch: SyncSettingsPatch) -> Self {
        Self {
            auto_sync: patch.auto_sync.unwrap_or(self.auto_sync),
            auto_sync_interval: patch
                .auto_sync_interval
                .unwrap_or(self.auto_sync_interval),
            sync_on_save: patch.sync_on_save.unwrap_or(self.sync_on_save),
        }
        .normalized()
    }

    /// Clamp the interval into the accepted range.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            auto_sync_interval: clamp_interval(self.auto_sync_interval),
            ..self
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSettingsPatch {
    #[serde(default)]
    pub auto_sync: Option<bool>,
    #[serde(default)]
    pub auto_sync_interval: Option<u32>,
    #[serde(default)]
    pub sync_on_save: Option<bool>,
}

impl SyncSettingsPatch {
    /// Whether the patch changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.auto_sync.is_none() && self.auto_sync_interval.is_none() && self.sync_on_save.is_none()
    }
}

/// Clamp an auto-sync interval to `1..=60` minutes.
pub const fn clamp_interval(minutes: u32) -> u32 {
    if minutes < MIN_AUTO_SYNC_INTERVAL {
        MIN_AUTO_SYNC_INTERVAL
    } else if minutes > MAX_AUTO_SYNC_INTERVAL {
        MAX_AUTO_SYNC_INTERVAL
    } else {
        minutes
    }
}
