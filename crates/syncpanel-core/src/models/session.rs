//! Sync session and statistics models

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique identifier for a sync session, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new unique session ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Totals recorded by one sync pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatistics {
    /// When the pass finished (Unix ms)
    pub timestamp: i64,
    /// Regular files seen in the folder
    pub total_files: u64,
    /// Sum of their sizes in bytes
    pub total_size: u64,
    /// Wall time of the pass
    pub duration_ms: u64,
}

/// Sync activity since a folder was selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSession {
    pub id: SessionId,
    /// When the session began (Unix ms)
    pub started_at: i64,
    /// Most recent successful sync (Unix ms)
    pub last_sync: Option<i64>,
    /// One entry per completed sync pass, oldest first
    pub statistics: Vec<SyncStatistics>,
}

impl SyncSession {
    /// Start an empty session at `started_at`.
    #[must_use]
    pub fn new(started_at: i64) -> Self {
        Self {
            id: SessionId::new(),
            started_at,
            last_sync: None,
            statistics: Vec::new(),
        }
    }

    /// Statistics of the most recent pass, if any.
    pub fn latest_statistics(&self) -> Option<&SyncStatistics> {
        self.statistics.last()
    }

    /// Record a finished pass and move `last_sync` to its timestamp.
    pub fn record(&mut self, statistics: SyncStatistics) {
        self.last_sync = Some(statistics.timestamp);
        self.statistics.push(statistics);
    }
}
