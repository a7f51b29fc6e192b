//! Greenwich mean sidereal time and the right ascension of the MC.
//!
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//!
//! The UTC Julian Day is used in place of UT1 (|UT1−UTC| < 0.9 s).

use mandala_time::J2000_JD;

use crate::fundamental::normalize_deg;

/// Earth Rotation Angle in degrees [0, 360).
pub fn earth_rotation_angle_deg(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    normalize_deg(turns.rem_euclid(1.0) * 360.0)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;
    normalize_deg(earth_rotation_angle_deg(jd) + poly_arcsec / 3600.0)
}

/// Local apparent sidereal time (RAMC) in degrees [0, 360).
///
/// GMST plus the equation of the equinoxes `Δψ·cos ε` plus east longitude.
pub fn ramc_deg(jd: f64, dpsi_deg: f64, true_obliquity_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_deg(
        gmst_deg(jd) + dpsi_deg * true_obliquity_deg.to_radians().cos() + longitude_east_deg,
    )
}
