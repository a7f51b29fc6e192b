//! Canon data: gate sequence, mandala constants and node policy.
//!
//! A canon directory holds three JSON files. Individual files can be
//! overridden; relative overrides resolve against the canon directory.

use std::fs;
use std::path::{Path, PathBuf};

use mandala_chart::GateSequence;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ConfigError;

pub const GATE_SEQUENCE_FILE: &str = "gate_sequence_v1.json";
pub const MANDALA_CONSTANTS_FILE: &str = "mandala_constants.json";
pub const NODE_POLICY_FILE: &str = "node_policy.json";

pub const DEFAULT_INTERVAL_RULE: &str = "start_inclusive_end_exclusive";

/// Resolved locations of the three canon files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonPaths {
    pub gate_sequence: PathBuf,
    pub mandala_constants: PathBuf,
    pub node_policy: PathBuf,
}

impl CanonPaths {
    /// Resolve file locations and check that each exists.
    pub fn resolve(
        canon_dir: &Path,
        gate_sequence: Option<&Path>,
        mandala_constants: Option<&Path>,
        node_policy: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let pick = |over: Option<&Path>, default: &str| -> Result<PathBuf, ConfigError> {
            let path = match over {
                Some(p) if p.is_absolute() => p.to_path_buf(),
                Some(p) => canon_dir.join(p),
                None => canon_dir.join(default),
            };
            if path.is_file() {
                Ok(path)
            } else {
                Err(ConfigError::CanonFileMissing(path))
            }
        };
        Ok(Self {
            gate_sequence: pick(gate_sequence, GATE_SEQUENCE_FILE)?,
            mandala_constants: pick(mandala_constants, MANDALA_CONSTANTS_FILE)?,
            node_policy: pick(node_policy, NODE_POLICY_FILE)?,
        })
    }

    /// Default file names inside `canon_dir`.
    pub fn in_dir(canon_dir: &Path) -> Result<Self, ConfigError> {
        Self::resolve(canon_dir, None, None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MandalaConstants {
    pub start_longitude_deg: f64,
    pub gate_width_deg: f64,
    pub line_width_deg: f64,
    #[serde(default = "default_interval_rule")]
    pub interval_rule: String,
}

fn default_interval_rule() -> String {
    DEFAULT_INTERVAL_RULE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodePolicy {
    pub astrology_nodes: String,
    pub human_design_nodes: String,
}

#[derive(Deserialize)]
struct GateSequenceFile {
    gate_sequence: Vec<u8>,
}

/// Loaded canon data.
#[derive(Debug, Clone, PartialEq)]
pub struct Canon {
    pub gate_sequence: GateSequence,
    pub mandala: MandalaConstants,
    pub node_policy: NodePolicy,
}

pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        context: path.display().to_string(),
        source,
    })
}

impl Canon {
    pub fn load(paths: &CanonPaths) -> Result<Self, ConfigError> {
        let seq: GateSequenceFile = read_json(&paths.gate_sequence)?;
        let gate_sequence = GateSequence::new(&seq.gate_sequence)
            .map_err(|e| ConfigError::InvalidCanon(e.to_string()))?;
        let mandala: MandalaConstants = read_json(&paths.mandala_constants)?;
        let node_policy: NodePolicy = read_json(&paths.node_policy)?;
        debug!(
            start = mandala.start_longitude_deg,
            astrology_nodes = %node_policy.astrology_nodes,
            human_design_nodes = %node_policy.human_design_nodes,
            "canon loaded"
        );
        Ok(Self {
            gate_sequence,
            mandala,
            node_policy,
        })
    }

    /// Canon defaults shaped as a partial case document.
    pub fn contract_defaults(&self) -> Value {
        json!({
            "engine_contract": {
                "node_policy_by_system": {
                    "astrology": self.node_policy.astrology_nodes,
                    "human_design": self.node_policy.human_design_nodes,
                    "gene_keys": "true",
                },
                "human_design_mapping": {
                    "mandala_start_deg": self.mandala.start_longitude_deg,
                    "gate_width_deg": self.mandala.gate_width_deg,
                    "line_width_deg": self.mandala.line_width_deg,
                    "interval_rule": self.mandala.interval_rule,
                },
            }
        })
    }
}
