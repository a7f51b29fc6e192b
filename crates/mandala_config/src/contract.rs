//! Engine contract validation.
//!
//! The engine computes under exactly one contract. Every field is checked
//! before any computation starts; the first deviation aborts.

use mandala_chart::{DesignTimeConfig, GATE_WIDTH_DEG, LINE_WIDTH_DEG, MandalaParams};
use mandala_ephem::{HouseSystem, NodeMode};

use crate::canon::DEFAULT_INTERVAL_RULE;
use crate::error::ConfigError;
use crate::input::CaseInput;

pub const SECONDS_POLICY: &str = "assume_00";
pub const EPHEMERIS: &str = "swiss_ephemeris";
pub const ZODIAC: &str = "tropical";
pub const HOUSES: &str = "placidus";
pub const ASTROLOGY_NODES: &str = "mean";

const WIDTH_TOLERANCE: f64 = 1e-12;

/// A case whose contract has been checked, with typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContract {
    pub case: CaseInput,
    pub house_system: HouseSystem,
    pub astrology_nodes: NodeMode,
    pub human_design_nodes: NodeMode,
    pub mandala: MandalaParams,
    pub solver: DesignTimeConfig,
}

fn require(field: &'static str, expected: &str, actual: &str) -> Result<(), ConfigError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ConfigError::violation(field, expected, actual))
    }
}

fn require_true(field: &'static str, actual: bool) -> Result<(), ConfigError> {
    if actual {
        Ok(())
    } else {
        Err(ConfigError::violation(field, true, actual))
    }
}

fn require_width(field: &'static str, expected: f64, actual: f64) -> Result<(), ConfigError> {
    if (actual - expected).abs() <= WIDTH_TOLERANCE {
        Ok(())
    } else {
        Err(ConfigError::violation(field, expected, actual))
    }
}

fn require_range(field: &'static str, limit: f64, actual: f64) -> Result<(), ConfigError> {
    if actual.is_finite() && actual.abs() <= limit {
        Ok(())
    } else {
        Err(ConfigError::violation(field, format!("within [-{limit}, {limit}]"), actual))
    }
}

/// Check every contract field of `case`.
pub fn validate_contract(case: &CaseInput) -> Result<ValidatedContract, ConfigError> {
    let birth = &case.birth;
    let ec = &case.engine_contract;
    let nodes = &ec.node_policy_by_system;
    let hd = &ec.human_design_mapping;
    let solver = &ec.design_time_solver;

    require("birth.seconds_policy", SECONDS_POLICY, &birth.seconds_policy)?;
    require("engine_contract.ephemeris", EPHEMERIS, &ec.ephemeris)?;
    require("engine_contract.zodiac", ZODIAC, &ec.zodiac)?;
    require("engine_contract.houses", HOUSES, &ec.houses)?;
    require("node_policy_by_system.astrology", ASTROLOGY_NODES, &nodes.astrology)?;
    require_true("node_policy_by_system.human_design", nodes.human_design)?;
    require_true("node_policy_by_system.gene_keys", nodes.gene_keys)?;
    require("human_design_mapping.interval_rule", DEFAULT_INTERVAL_RULE, &hd.interval_rule)?;
    require_width("human_design_mapping.gate_width_deg", GATE_WIDTH_DEG, hd.gate_width_deg)?;
    require_width("human_design_mapping.line_width_deg", LINE_WIDTH_DEG, hd.line_width_deg)?;
    require_range("birth.latitude", 90.0, birth.latitude)?;
    require_range("birth.longitude", 180.0, birth.longitude)?;

    let mandala = MandalaParams {
        start_deg: hd.mandala_start_deg,
        gate_width_deg: hd.gate_width_deg,
        line_width_deg: hd.line_width_deg,
    };
    mandala
        .validate()
        .map_err(|e| ConfigError::violation("human_design_mapping", "valid mandala", e))?;

    let solver = DesignTimeConfig::new(
        solver.sun_offset_deg,
        solver.stop_if_abs_sun_diff_deg_below,
        solver.stop_if_time_bracket_below_seconds as f64,
    );
    solver
        .validate()
        .map_err(|e| ConfigError::violation("design_time_solver", "valid solver parameters", e))?;

    Ok(ValidatedContract {
        case: case.clone(),
        house_system: HouseSystem::Placidus,
        astrology_nodes: NodeMode::Mean,
        human_design_nodes: NodeMode::from_true_flag(nodes.human_design),
        mandala,
        solver,
    })
}
