//! Application settings from the environment.
//!
//! Keys use the `MANDALA_` prefix, e.g. `MANDALA_CANON_DIR=/srv/canon`.
//! A settings file may be named with `MANDALA_CONFIG`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::canon::CanonPaths;
use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "MANDALA";
pub const DEFAULT_CANON_DIR: &str = "canon";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canon_dir: PathBuf,
    pub gate_sequence_file: Option<PathBuf>,
    pub mandala_constants_file: Option<PathBuf>,
    pub node_policy_file: Option<PathBuf>,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canon_dir: PathBuf::from(DEFAULT_CANON_DIR),
            gate_sequence_file: None,
            mandala_constants_file: None,
            node_policy_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(vars.clone()));
        let file = match &vars {
            Some(map) => map.get("MANDALA_CONFIG").cloned(),
            None => std::env::var("MANDALA_CONFIG").ok(),
        };
        if let Some(path) = file {
            builder = builder.add_source(config::File::with_name(&path));
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Canon file locations under these settings.
    pub fn canon_paths(&self) -> Result<CanonPaths, ConfigError> {
        CanonPaths::resolve(
            &self.canon_dir,
            self.gate_sequence_file.as_deref(),
            self.mandala_constants_file.as_deref(),
            self.node_policy_file.as_deref(),
        )
    }
}
