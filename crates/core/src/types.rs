use chrono::Timelike;

/// All timestamps are local wall-clock time at second precision.
///
/// Sensors never send a timestamp; the ingestion endpoint stamps each reading
/// with the host's local time, so no zone information is stored.
pub type Timestamp = chrono::NaiveDateTime;

/// Canonical on-disk timestamp format (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds.
pub fn now_local() -> Timestamp {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a timestamp in [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
