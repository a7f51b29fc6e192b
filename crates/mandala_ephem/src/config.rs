//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Default latitude bound for semi-arc house systems.
pub const DEFAULT_MAX_SEMI_ARC_LATITUDE_DEG: f64 = 66.5;

/// Configuration for [`crate::Ephemeris`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Apply nutation and aberration (apparent positions).
    pub apparent: bool,
    /// Largest |latitude| accepted for Placidus cusps.
    pub max_semi_arc_latitude_deg: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            apparent: true,
            max_semi_arc_latitude_deg: DEFAULT_MAX_SEMI_ARC_LATITUDE_DEG,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.max_semi_arc_latitude_deg.is_finite()
            || self.max_semi_arc_latitude_deg <= 0.0
            || self.max_semi_arc_latitude_deg >= 90.0
        {
            return Err(EphemerisError::InvalidConfig(
                "max_semi_arc_latitude_deg must be inside (0, 90)",
            ));
        }
        Ok(())
    }
}
