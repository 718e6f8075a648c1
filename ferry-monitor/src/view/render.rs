//! Log entry rendering

use chrono::TimeZone;
use ferry_core::domain::log::LogEntry;
use std::fmt::Display;

/// Fixed-width timestamp pattern, `yy-MM-dd HH:mm:ss.SSS`
pub const TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M:%S%.3f";

/// Placeholder of the same width for timestamps outside chrono's range
const INVALID_TIMESTAMP: &str = "??-??-?? ??:??:??.???";

/// Formats milliseconds since epoch in `tz`
///
/// The output does not depend on the process locale and always has the same width.
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_TIMESTAMP.to_string(),
    }
}

/// Renders an entry as `{timestamp} [{thread}] {message}`
///
/// Message segments are concatenated in order without separators.
pub fn render_entry<Tz>(entry: &LogEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} [{}] {}",
        format_timestamp(entry.timestamp_millis, tz),
        entry.thread,
        entry.text()
    )
}
