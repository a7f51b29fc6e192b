//! Ascendant, MC and house cusps.
//!
//! Angles: standard spherical astronomy (Meeus Ch. 13).
//! Placidus: iterative trisection of the diurnal/nocturnal semi-arcs.
//! Porphyry: equal trisection of each ecliptic quadrant.

use std::f64::consts::PI;

use mandala_time::jd_to_centuries;

use crate::body::{HouseCusps, HouseSystem};
use crate::error::EphemerisError;
use crate::fundamental::{mean_obliquity_deg, normalize_deg, nutation_deg};
use crate::sidereal::ramc_deg;

const PLACIDUS_MAX_ITERATIONS: usize = 50;
const PLACIDUS_TOLERANCE_RAD: f64 = 1e-12;

/// Forward arc from `a` to `b` in degrees [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_deg(b - a)
}

/// Ecliptic longitudes of the Ascendant and MC, in degrees.
pub fn ascendant_mc(ramc_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> (f64, f64) {
    let theta = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    let mc = f64::atan2(theta.sin(), theta.cos() * eps.cos());
    (normalize_deg(asc.to_degrees()), normalize_deg(mc.to_degrees()))
}

/// Ecliptic longitude (radians) of the ecliptic point with right ascension `ra`.
fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    f64::atan2(ra.sin(), ra.cos() * eps.cos()).rem_euclid(2.0 * PI)
}

/// Diurnal semi-arc of a point with declination `dec` at latitude `phi`.
fn diurnal_semi_arc(dec: f64, phi: f64) -> f64 {
    (-dec.tan() * phi.tan()).clamp(-1.0, 1.0).acos()
}

/// One Placidus intermediate cusp, in radians.
///
/// Above the horizon (cusps 11, 12) the cusp sits `fraction` of the diurnal
/// semi-arc east of the meridian; below (cusps 2, 3) it sits `1 − fraction`
/// of the nocturnal semi-arc west of the lower meridian.
fn placidus_cusp(theta: f64, eps: f64, phi: f64, fraction: f64, above: bool) -> f64 {
    let target = |dsa: f64| {
        if above {
            theta + fraction * dsa
        } else {
            theta + PI - (1.0 - fraction) * (PI - dsa)
        }
    };
    let mut ra = target(PI / 2.0);
    for _ in 0..PLACIDUS_MAX_ITERATIONS {
        let lon = ecliptic_longitude_of_ra(ra, eps);
        let dec = (eps.sin() * lon.sin()).asin();
        let next = target(diurnal_semi_arc(dec, phi));
        let done = (next - ra).abs() < PLACIDUS_TOLERANCE_RAD;
        ra = next;
        if done {
            break;
        }
    }
    ecliptic_longitude_of_ra(ra, eps)
}

/// Fill the opposite half of the wheel and the four angles.
fn complete_wheel(asc: f64, mc: f64, c11: f64, c12: f64, c2: f64, c3: f64) -> [f64; 12] {
    let mut cusps = [0.0_f64; 12];
    cusps[0] = asc;
    cusps[1] = c2;
    cusps[2] = c3;
    cusps[3] = normalize_deg(mc + 180.0);
    cusps[6] = normalize_deg(asc + 180.0);
    cusps[9] = mc;
    cusps[10] = c11;
    cusps[11] = c12;
    for i in [1, 2, 10, 11] {
        cusps[(i + 6) % 12] = normalize_deg(cusps[i] + 180.0);
    }
    cusps
}

/// Placidus cusps in degrees, index 0 = house 1.
pub fn placidus_cusps(ramc_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> [f64; 12] {
    let (asc, mc) = ascendant_mc(ramc_deg, obliquity_deg, latitude_deg);
    let theta = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let cusp = |frac: f64, above: bool| placidus_cusp(theta, eps, phi, frac, above).to_degrees();
    complete_wheel(
        asc,
        mc,
        cusp(1.0 / 3.0, true),
        cusp(2.0 / 3.0, true),
        cusp(1.0 / 3.0, false),
        cusp(2.0 / 3.0, false),
    )
}

/// Porphyry cusps in degrees, index 0 = house 1.
pub fn porphyry_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let upper = arc_forward(mc_deg, asc_deg) / 3.0;
    let lower = arc_forward(asc_deg, normalize_deg(mc_deg + 180.0)) / 3.0;
    complete_wheel(
        asc_deg,
        mc_deg,
        normalize_deg(mc_deg + upper),
        normalize_deg(mc_deg + 2.0 * upper),
        normalize_deg(asc_deg + lower),
        normalize_deg(asc_deg + 2.0 * lower),
    )
}

/// Compute house cusps for a UTC Julian Day and geographic location.
///
/// `max_semi_arc_latitude_deg` bounds Placidus, which is undefined where
/// parts of the ecliptic are circumpolar.
pub fn compute_house_cusps(
    jd: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    system: HouseSystem,
    max_semi_arc_latitude_deg: f64,
) -> Result<HouseCusps, EphemerisError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(EphemerisError::InvalidQuery("latitude must be inside (-90, 90)"));
    }
    if !longitude_east_deg.is_finite() || longitude_east_deg.abs() > 180.0 {
        return Err(EphemerisError::InvalidQuery("longitude must be inside [-180, 180]"));
    }
    if system == HouseSystem::Placidus && latitude_deg.abs() > max_semi_arc_latitude_deg {
        return Err(EphemerisError::LatitudeOutOfRange {
            latitude_deg,
            max_deg: max_semi_arc_latitude_deg,
            system: system.name(),
        });
    }

    let t = jd_to_centuries(jd);
    let (dpsi, deps) = nutation_deg(t);
    let eps = mean_obliquity_deg(t) + deps;
    let ramc = ramc_deg(jd, dpsi, eps, longitude_east_deg);
    let (ascendant, mc) = ascendant_mc(ramc, eps, latitude_deg);
    let cusps = match system {
        HouseSystem::Placidus => placidus_cusps(ramc, eps, latitude_deg),
        HouseSystem::Porphyry => porphyry_cusps(ascendant, mc),
    };
    Ok(HouseCusps {
        cusps,
        ascendant,
        mc,
    })
}
