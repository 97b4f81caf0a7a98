//! Calendar date handling
//!
//! All dates in the store and on the wire use the `YYYY-MM-DD` form.
//! Parsing is strict: zero padding is required and impossible calendar
//! dates (month 13, Feb 30) are rejected.

use chrono::NaiveDate;
use thiserror::Error;

/// Wire and store format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string did not match `YYYY-MM-DD` or named an impossible date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date {input:?}: expected YYYY-MM-DD")]
pub struct DateParseError {
    /// The rejected input, verbatim
    pub input: String,
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    // chrono accepts unpadded fields ("2017-1-1"); the length check keeps
    // the format strict so that format_date round-trips every accepted input.
    if s.len() != 10 {
        return Err(DateParseError { input: s.to_string() });
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateParseError {
        input: s.to_string(),
    })
}

/// Format a date as `YYYY-MM-DD`. Inverse of [`parse_date`] for valid input.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Calendar-correct subtraction of `days` whole days.
///
/// Crosses month and year boundaries, including leap years: the result is
/// the calendar day exactly `days` days earlier, not a fixed-month offset.
pub fn subtract_days(date: NaiveDate, days: i64) -> NaiveDate {
    date - chrono::Duration::days(days)
}
