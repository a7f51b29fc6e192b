//! The position-resolver seam consumed by chart computation.

use crate::body::{EphemerisBody, HouseCusps, HouseSystem};
use crate::error::EphemerisError;

/// Source of tropical geocentric ecliptic longitudes and house cusps.
///
/// Implementations must be deterministic: the same `jd` and body always
/// yield the same longitude. Longitudes are in degrees [0, 360).
pub trait PositionResolver: Send + Sync {
    /// Apparent tropical longitude of `body` at the UTC Julian Day `jd`.
    fn longitude_at(&self, jd: f64, body: EphemerisBody) -> Result<f64, EphemerisError>;

    /// House cusps, Ascendant and MC for a location at `jd`.
    fn house_cusps(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}

impl<R: PositionResolver + ?Sized> PositionResolver for &R {
    fn longitude_at(&self, jd: f64, body: EphemerisBody) -> Result<f64, EphemerisError> {
        (**self).longitude_at(jd, body)
    }

    fn house_cusps(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).house_cusps(jd, latitude_deg, longitude_deg, system)
    }
}
