//! Angle helpers, Delaunay arguments, nutation and obliquity.
//!
//! Sources:
//! - Delaunay arguments: IERS Conventions 2010, Table 5.2e.
//! - Nutation (low-accuracy, ~0.5″): Meeus, *Astronomical Algorithms*
//!   (2nd ed.), Chapter 22.
//! - Mean obliquity: IAU 1980 (Meeus Eq. 22.2).
//! - General precession in longitude: IAU 2006 (Capitaine et al. 2003).

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Normalize an angle in degrees to [0, 360).
///
/// Values that round to exactly 360.0 collapse to 0.0.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// The five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`: Moon mean anomaly, Sun mean anomaly, Moon
/// argument of latitude, Moon mean elongation, and the mean longitude of
/// the Moon's ascending node.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in degrees.
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let om = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();

    (dpsi / 3600.0, deps / 3600.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_11 - (46.8150 * t + 0.00059 * t * t - 0.001813 * t * t * t) / 3600.0
}

/// True obliquity (mean + Δε) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_deg(t).1
}

/// Accumulated general precession in longitude since J2000.0, in degrees.
///
/// Adding this to a J2000 ecliptic longitude gives the mean-equinox-of-date
/// longitude.
pub fn precession_longitude_deg(t: f64) -> f64 {
    (5029.0966 * t + 1.11113 * t * t) / 3600.0
}

/// Constant of annual aberration, in degrees.
pub const ABERRATION_DEG: f64 = 20.49552 / 3600.0;
