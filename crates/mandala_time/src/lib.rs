//! Civil-time normalization for birth charts.
//!
//! This crate provides:
//! - Parsing of birth date (`YYYY-MM-DD`) and wall-clock time (`HH:MM`)
//! - IANA timezone resolution, including historical and DST transitions
//! - Conversion of the resulting UTC instant to a Julian Day
//!
//! The Julian Day produced here is a UTC day count
//! (`JD = unix_seconds / 86400 + 2440587.5`); no leap-second or ΔT
//! correction is applied.

pub mod civil;
pub mod error;
pub mod julian;
pub mod zone;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

pub use civil::{parse_birth_date, parse_birth_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries,
    jd_to_unix_seconds, unix_seconds_to_jd,
};
pub use zone::{LocalResolution, local_to_utc, resolve_zone};

/// A birth moment normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInstant {
    /// The wall-clock time as entered (seconds forced to 00).
    pub local: NaiveDateTime,
    /// The corresponding UTC instant.
    pub utc: DateTime<Utc>,
    /// Julian Day of `utc`.
    pub jd_utc: f64,
    /// Local minus UTC, in seconds, at the birth instant.
    pub utc_offset_seconds: i64,
    /// How the wall-clock time mapped onto the zone rules.
    pub resolution: LocalResolution,
}

/// Julian Day of a UTC instant, with sub-second precision.
pub fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9;
    unix_seconds_to_jd(seconds)
}

/// Normalize a birth date, wall-clock time and IANA zone into a Julian Day.
///
/// # Errors
/// [`TimeError::InvalidBirthTime`] for unparsable date/time strings,
/// [`TimeError::TimezoneNotFound`] for unknown zone identifiers.
pub fn normalize_birth(date: &str, time_hh_mm: &str, zone: &str) -> Result<BirthInstant, TimeError> {
    let tz = resolve_zone(zone)?;
    let local = parse_birth_date(date)?.and_time(parse_birth_time(time_hh_mm)?);
    let (utc, resolution) = local_to_utc(local, tz)?;
    let jd_utc = utc_to_jd(&utc);
    let utc_offset_seconds = (local - utc.naive_utc()).num_seconds();
    debug!(%local, %utc, jd_utc, utc_offset_seconds, "normalized birth time");
    Ok(BirthInstant {
        local,
        utc,
        jd_utc,
        utc_offset_seconds,
        resolution,
    })
}
