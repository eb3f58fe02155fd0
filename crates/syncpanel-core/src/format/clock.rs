//! "Last synced" labels: a wall-clock time plus an elapsed bucket.

use chrono::{DateTime, Local, TimeZone};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Format `timestamp_ms` as local `HH:MM:SS`, suffixed with `(Nm ago)` or
/// `(Nh ago)` once at least a minute has passed by `now_ms`.
pub fn format_last_sync(timestamp_ms: i64, now_ms: i64) -> String {
    format_last_sync_in(timestamp_ms, now_ms, &Local)
}

/// Same as [`format_last_sync`], rendering the clock portion in `zone`.
///
/// Thresholds are strict: exactly one minute is `(1m ago)`, exactly one hour
/// is `(1h ago)`. Hours are never rolled up into days. A `now_ms` earlier
/// than `timestamp_ms` yields the bare clock time.
pub fn format_last_sync_in<Tz: TimeZone>(timestamp_ms: i64, now_ms: i64, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let clock = clock_time(timestamp_ms, zone);
    let diff = now_ms.saturating_sub(timestamp_ms);

    if diff < MINUTE_MS {
        clock
    } else if diff < HOUR_MS {
        format!("{clock} ({}m ago)", diff / MINUTE_MS)
    } else {
        format!("{clock} ({}h ago)", diff / HOUR_MS)
    }
}

fn clock_time<Tz: TimeZone>(timestamp_ms: i64, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| date_time.with_timezone(zone).format("%H:%M:%S").to_string(),
    )
}
