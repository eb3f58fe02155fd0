//! Data models for syncpanel

mod folder;
mod history_item;
mod session;
mod settings;

pub use folder::FolderHandle;
pub use history_item::ChatHistoryItem;
pub use session::{SessionId, SyncSession, SyncStatistics};
pub use settings::{
    clamp_interval, SyncSettings, SyncSettingsPatch, MAX_AUTO_SYNC_INTERVAL,
    MIN_AUTO_SYNC_INTERVAL,
};
