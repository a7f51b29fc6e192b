//! Error types for position and house resolution.

use thiserror::Error;

use crate::body::EphemerisBody;

/// Errors from the position resolver.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The resolver has no model for this body.
    #[error("unsupported body: {0}")]
    UnsupportedBody(EphemerisBody),
    /// Rejected configuration value.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Rejected query argument.
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    /// Semi-arc house systems are undefined near the poles.
    #[error("latitude {latitude_deg} outside supported range ±{max_deg} for {system}")]
    LatitudeOutOfRange {
        latitude_deg: f64,
        max_deg: f64,
        system: &'static str,
    },
    /// The process-wide resolver was not initialized.
    #[error("ephemeris not initialized")]
    NotInitialized,
    /// The process-wide resolver was already initialized.
    #[error("ephemeris already initialized")]
    AlreadyInitialized,
}
