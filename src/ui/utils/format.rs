use chrono::{DateTime, Local};
use humansize::{BINARY, format_size};

/// Human readable size, e.g. `1.5 KiB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Local calendar date of a Unix timestamp in seconds, or an empty string if
/// the timestamp is out of range.
#[must_use]
pub fn format_date(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|date_time| date_time.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
