//! Geocentric apparent longitudes of the Sun and planets.
//!
//! Geometric positions come from [`crate::kepler`]; the J2000 longitude is
//! carried to the equinox of date with general precession, then nutation in
//! longitude and annual aberration are applied when `apparent` is set.

use crate::fundamental::{ABERRATION_DEG, normalize_deg, nutation_deg, precession_longitude_deg};
use crate::kepler::{LIGHT_TIME_DAYS_PER_AU, Orbit, heliocentric_position};

/// Light-time passes for planets.
const LIGHT_TIME_PASSES: usize = 2;

/// Geometric geocentric Sun longitude in the J2000 ecliptic, degrees.
fn sun_j2000_deg(t: f64) -> f64 {
    let [x, y, _] = heliocentric_position(Orbit::EarthMoonBary, t);
    f64::atan2(-y, -x).to_degrees()
}

/// Geocentric Sun longitude (mean equinox of date, no nutation/aberration).
pub fn sun_geometric_deg(t: f64) -> f64 {
    normalize_deg(sun_j2000_deg(t) + precession_longitude_deg(t))
}

/// Geocentric tropical Sun longitude in degrees [0, 360).
pub fn sun_longitude_deg(t: f64, apparent: bool) -> f64 {
    let mut lon = sun_j2000_deg(t) + precession_longitude_deg(t);
    if apparent {
        lon += nutation_deg(t).0 - ABERRATION_DEG;
    }
    normalize_deg(lon)
}

/// Geocentric tropical planet longitude in degrees [0, 360).
///
/// `orbit` must not be [`Orbit::EarthMoonBary`].
pub fn planet_longitude_deg(orbit: Orbit, t: f64, apparent: bool) -> f64 {
    let earth = heliocentric_position(Orbit::EarthMoonBary, t);
    let mut tau_days = 0.0;
    let mut rel = [0.0_f64; 3];
    for _ in 0..LIGHT_TIME_PASSES {
        let p = heliocentric_position(orbit, t - tau_days / 36_525.0);
        rel = [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
        let dist = (rel[0] * rel[0] + rel[1] * rel[1] + rel[2] * rel[2]).sqrt();
        tau_days = LIGHT_TIME_DAYS_PER_AU * dist;
    }

    let mut lon = f64::atan2(rel[1], rel[0]).to_degrees() + precession_longitude_deg(t);
    if apparent {
        lon += nutation_deg(t).0;
        let sun = sun_geometric_deg(t);
        lon -= ABERRATION_DEG * (sun - lon).to_radians().cos();
    }
    normalize_deg(lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_of(jd: f64) -> f64 {
        (jd - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992-10-13 0h TD: apparent λ = 199°54′21.8″ = 199.906
        let lon = sun_longitude_deg(t_of(2_448_908.5), true);
        assert!((lon - 199.906).abs() < 0.01, "sun = {lon}");
    }

    #[test]
    fn sun_near_equinox_at_march_20() {
        // 2000-03-20 07:35 UT vernal equinox
        let lon = sun_longitude_deg(t_of(2_451_623.816), true);
        let d = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(d.abs() < 0.02, "sun = {lon}");
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992-12-20 0h TD: apparent λ = 313.08102
        let lon = planet_longitude_deg(Orbit::Venus, t_of(2_448_976.5), true);
        assert!((lon - 313.081).abs() < 0.05, "venus = {lon}");
    }

    #[test]
    fn apparent_and_geometric_differ_slightly() {
        let t = 0.1;
        let a = sun_longitude_deg(t, true);
        let g = sun_longitude_deg(t, false);
        assert!((a - g).abs() < 0.02);
        assert!(a != g);
    }
}
