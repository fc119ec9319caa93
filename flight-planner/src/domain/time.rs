//! Schedule timestamp handling.
//!
//! The schedule feed provides timestamps as "DD-MM-YYYY HH:MM:SS" strings.
//! This module parses and formats that fixed format, and converts between
//! timestamps and fractional hours, the unit the planner computes in.

use chrono::NaiveDateTime;

/// The fixed textual timestamp format used by the schedule feed:
/// day-month-year hour:minute:second.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: expected day-month-year hour:minute:second")]
pub struct TimeError {
    /// The rejected input.
    pub value: String,
}

/// Parse a schedule timestamp.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::parse_timestamp;
///
/// let t = parse_timestamp("10-07-2024 12:30:00").unwrap();
/// assert_eq!(t.to_string(), "2024-07-10 12:30:00");
///
/// assert!(parse_timestamp("2024-07-10 12:30:00").is_err());
/// assert!(parse_timestamp("not a time").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|_| TimeError {
        value: s.to_string(),
    })
}

/// Format a timestamp back into the schedule feed's textual format.
pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the signed number of hours from `earlier` to `later`.
///
/// Negative when `later` is actually before `earlier`.
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    later.signed_duration_since(earlier).num_seconds() as f64 / 3600.0
}
