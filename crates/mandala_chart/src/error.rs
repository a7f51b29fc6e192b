//! Error types for chart computation.

use mandala_ephem::EphemerisError;
use thiserror::Error;

/// Errors from chart mapping and the design-time search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Position lookup failed.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// No sign change of the Sun residual was found after all widenings.
    #[error("design time bracket not found for sun offset {offset_deg}°")]
    DesignTimeBracketNotFound { offset_deg: f64 },
    /// A gate/line string is not of the form `G.L`.
    #[error("invalid activation format: {0:?}")]
    InvalidActivationFormat(String),
    /// The gate sequence is not a permutation of 1..=64.
    #[error("invalid gate sequence: {0}")]
    InvalidGateSequence(String),
    /// Rejected mandala or solver parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
