//! Approximate "time since" labels for history entries ("about 2 hours ago").

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Describe the distance between `timestamp_ms` and `now_ms` in words,
/// suffixed with "ago" (or prefixed with "in" for future instants).
///
/// Months are counted as 30 days and years as 12 of those months, so the
/// year wording starts at 360 days. Calendar-month counting would still say
/// "12 months" there and switch at the first anniversary instead.
pub fn format_distance(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let words = distance_in_words(diff.unsigned_abs() / 1_000);

    if diff >= 0 {
        format!("{words} ago")
    } else {
        format!("in {words}")
    }
}

/// [`format_distance`] relative to the current system time.
pub fn format_distance_to_now(timestamp_ms: i64) -> String {
    format_distance(timestamp_ms, crate::util::unix_timestamp_ms_now())
}

fn distance_in_words(seconds: u64) -> String {
    let minutes = i64::try_from(rounded_div(seconds, 60)).unwrap_or(i64::MAX);

    if minutes == 0 {
        "less than a minute".to_string()
    } else if minutes < 2 {
        "1 minute".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = rounded_div_i64(minutes, MINUTES_IN_HOUR);
        format!("about {hours} hours")
    } else if minutes < 2_520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = rounded_div_i64(minutes, MINUTES_IN_DAY);
        format!("{days} days")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months = rounded_div_i64(minutes, MINUTES_IN_MONTH);
        plural("about ", months, "month")
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            let nearest = rounded_div_i64(minutes, MINUTES_IN_MONTH);
            plural("", nearest, "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => plural("about ", years, "year"),
                3..=8 => plural("over ", years, "year"),
                _ => plural("almost ", years + 1, "year"),
            }
        }
    }
}

fn plural(prefix: &str, count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{count} {unit}s")
    }
}

const fn rounded_div(value: u64, divisor: u64) -> u64 {
    value.saturating_add(divisor / 2) / divisor
}

const fn rounded_div_i64(value: i64, divisor: i64) -> i64 {
    value.saturating_add(divisor / 2) / divisor
}
