pub mod common;
pub mod completions;
pub mod folder;
pub mod format;
pub mod settings;
pub mod sync;
pub mod watch;
