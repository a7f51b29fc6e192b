//! Parsing of the birth date and wall-clock time strings.
//!
//! Dates are ISO `YYYY-MM-DD`. Times accept `HH:MM` and `HH:MM:SS`; under
//! the `assume_00` seconds policy any seconds component is discarded.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::TimeError;

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_birth_date(date: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| TimeError::InvalidBirthTime(format!("date {date:?}: {e}")))
}

/// Parse a wall-clock time, forcing seconds to zero.
pub fn parse_birth_time(time: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = time.trim();
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| TimeError::InvalidBirthTime(format!("time {time:?}: {e}")))?;
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
        .ok_or_else(|| TimeError::InvalidBirthTime(format!("time {time:?}: out of range")))
}
