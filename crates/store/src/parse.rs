//! Field-level parsing and formatting for the delimited store format.

use chrono::NaiveDate;
use envmon_core::types::{Timestamp, TIMESTAMP_FORMAT};

/// Date-time layouts accepted on read, canonical first.
const TIMESTAMP_LAYOUTS: [&str; 4] = [
    TIMESTAMP_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a stored timestamp. Returns `None` for anything unrecognised.
///
/// A bare `YYYY-MM-DD` date is read as midnight.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    TIMESTAMP_LAYOUTS
        .iter()
        .find_map(|layout| Timestamp::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a stored sensor value. Empty, non-numeric and non-finite fields are
/// treated as missing.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a sensor value for storage; missing values become an empty field.
pub fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
