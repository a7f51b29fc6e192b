//! Analytic reference resolver.

use mandala_time::jd_to_centuries;
use tracing::trace;

use crate::body::{EphemerisBody, HouseCusps, HouseSystem, NodeMode};
use crate::config::EphemerisConfig;
use crate::error::EphemerisError;
use crate::houses::compute_house_cusps;
use crate::kepler::Orbit;
use crate::lunar::moon_longitude_deg;
use crate::lunar_nodes::north_node_deg;
use crate::planets::{planet_longitude_deg, sun_longitude_deg};
use crate::resolver::PositionResolver;

/// Closed-form resolver built from mean elements and periodic series.
///
/// Sun accuracy is about 0.005°, planets about 0.1° within 1800–2050.
/// Chiron is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    /// Build a resolver after validating `config`.
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }
}

impl PositionResolver for Ephemeris {
    fn longitude_at(&self, jd: f64, body: EphemerisBody) -> Result<f64, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidQuery("julian day must be finite"));
        }
        let t = jd_to_centuries(jd);
        let apparent = self.config.apparent;
        let orbit = |o: Orbit| planet_longitude_deg(o, t, apparent);
        let lon = match body {
            EphemerisBody::Sun => sun_longitude_deg(t, apparent),
            EphemerisBody::Moon => moon_longitude_deg(t, apparent),
            EphemerisBody::Mercury => orbit(Orbit::Mercury),
            EphemerisBody::Venus => orbit(Orbit::Venus),
            EphemerisBody::Mars => orbit(Orbit::Mars),
            EphemerisBody::Jupiter => orbit(Orbit::Jupiter),
            EphemerisBody::Saturn => orbit(Orbit::Saturn),
            EphemerisBody::Uranus => orbit(Orbit::Uranus),
            EphemerisBody::Neptune => orbit(Orbit::Neptune),
            EphemerisBody::Pluto => orbit(Orbit::Pluto),
            EphemerisBody::MeanNode => north_node_deg(t, NodeMode::Mean),
            EphemerisBody::TrueNode => north_node_deg(t, NodeMode::True),
            EphemerisBody::Chiron => return Err(EphemerisError::UnsupportedBody(body)),
        };
        trace!(jd, %body, lon, "longitude");
        Ok(lon)
    }

    fn house_cusps(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidQuery("julian day must be finite"));
        }
        compute_house_cusps(
            jd,
            latitude_deg,
            longitude_deg,
            system,
            self.config.max_semi_arc_latitude_deg,
        )
    }
}
