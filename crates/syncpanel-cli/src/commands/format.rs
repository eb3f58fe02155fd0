use chrono::Utc;
use syncpanel_core::format::{
    format_distance, format_file_size, format_last_sync, format_last_sync_in,
};
use syncpanel_core::util::unix_timestamp_ms_now;

pub fn run_size(bytes: u64) {
    println!("{}", format_file_size(bytes));
}

pub fn run_time(timestamp: i64, now: Option<i64>, utc: bool) {
    println!("{}", render_time(timestamp, now.unwrap_or_else(unix_timestamp_ms_now), utc));
}

pub fn render_time(timestamp: i64, now: i64, utc: bool) -> String {
    if utc {
        format_last_sync_in(timestamp, now, &Utc)
    } else {
        format_last_sync(timestamp, now)
    }
}

pub fn run_ago(timestamp: i64, now: Option<i64>) {
    println!(
        "{}",
        format_distance(timestamp, now.unwrap_or_else(unix_timestamp_ms_now))
    );
}
