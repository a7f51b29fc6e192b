//! Process-wide resolver instance.

use std::sync::OnceLock;

use tracing::info;

use crate::config::EphemerisConfig;
use crate::engine::Ephemeris;
use crate::error::EphemerisError;

static ENGINE: OnceLock<Ephemeris> = OnceLock::new();

/// Initialize the global resolver. Fails if called twice.
pub fn init(config: EphemerisConfig) -> Result<(), EphemerisError> {
    let eph = Ephemeris::new(config)?;
    ENGINE
        .set(eph)
        .map_err(|_| EphemerisError::AlreadyInitialized)?;
    info!(apparent = config.apparent, "ephemeris initialized");
    Ok(())
}

/// Whether [`init`] has succeeded.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// The global resolver.
pub fn engine() -> Result<&'static Ephemeris, EphemerisError> {
    ENGINE.get().ok_or(EphemerisError::NotInitialized)
}
