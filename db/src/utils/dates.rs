use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Relative description of `date` as seen from `now`, e.g. "3 days ago" or
/// "2 hours from now". Only the largest unit is reported.
pub fn diff_for_humans(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(date).num_seconds();
    let suffix = if seconds < 0 { "from now" } else { "ago" };
    let seconds = seconds.abs();

    let (count, unit) = match seconds {
        s if s >= YEAR => (s / YEAR, "year"),
        // 360..365 days would otherwise read "12 months"
        s if s >= MONTH => ((s / MONTH).min(11), "month"),
        s if s >= WEEK => (s / WEEK, "week"),
        s if s >= DAY => (s / DAY, "day"),
        s if s >= HOUR => (s / HOUR, "hour"),
        s if s >= MINUTE => (s / MINUTE, "minute"),
        s => (s.max(1), "second"),
    };

    if count == 1 {
        format!("1 {} {}", unit, suffix)
    } else {
        format!("{} {}s {}", count, unit, suffix)
    }
}
