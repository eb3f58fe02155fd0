//! Display formatters for sync and history state.
//!
//! All formatters are pure: the same inputs always produce the same label.
//! Callers pass "now" explicitly so labels can be recomputed on a timer.

pub mod bytes;
pub mod clock;
pub mod distance;

pub use bytes::format_file_size;
pub use clock::{format_last_sync, format_last_sync_in};
pub use distance::{format_distance, format_distance_to_now};
