//! Pipeline error type.

use mandala_chart::ChartError;
use mandala_config::ConfigError;
use mandala_ephem::EphemerisError;
use mandala_time::TimeError;
use thiserror::Error;

/// Any failure that aborts a case. No partial output is produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}
