//! syncpanel-core - Core library for syncpanel
//!
//! This crate contains the display formatters, the workbench store seam and
//! its change events, and the sync tab view model used by the CLI.

pub mod error;
pub mod events;
pub mod format;
pub mod history;
pub mod models;
pub mod refresh;
pub mod store;
pub mod sync_tab;
pub mod util;

pub use error::{Error, Result};
pub use events::{StoreEvent, StoreEvents};
pub use store::{FolderPicker, LocalWorkbench, WorkbenchStore};
pub use sync_tab::{SyncTab, SyncTabView};
