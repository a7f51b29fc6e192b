//! Julian Day helpers anchored on the Unix epoch.

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert seconds since the Unix epoch to a Julian Day.
///
/// `JD = unix_seconds / 86400 + 2440587.5`
pub fn unix_seconds_to_jd(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Convert a Julian Day back to seconds since the Unix epoch.
pub fn jd_to_unix_seconds(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
