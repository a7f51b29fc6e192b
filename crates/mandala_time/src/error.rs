//! Error types for civil-time normalization.

use thiserror::Error;

/// Errors from birth date/time parsing and timezone resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The IANA zone identifier is not in the bundled timezone database.
    #[error("timezone not found: {0}")]
    TimezoneNotFound(String),
    /// The date or time-of-day string could not be parsed.
    #[error("invalid birth time: {0}")]
    InvalidBirthTime(String),
}
