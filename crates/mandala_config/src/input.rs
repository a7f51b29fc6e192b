//! The case input document.

use serde::{Deserialize, Deserializer, Serialize};

/// One birth case plus the engine contract it must be computed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub birth: BirthInput,
    pub engine_contract: EngineContract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` (or `HH:MM:SS`, seconds discarded)
    pub time_hh_mm: String,
    pub seconds_policy: String,
    /// Display only.
    pub place_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_iana: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineContract {
    pub ephemeris: String,
    pub zodiac: String,
    pub houses: String,
    pub node_policy_by_system: NodePolicyBySystem,
    pub human_design_mapping: HumanDesignMapping,
    pub design_time_solver: DesignTimeSolverParams,
}

/// Which lunar node each system reads.
///
/// `human_design` and `gene_keys` are "use the true node" flags; they accept
/// JSON booleans as well as the strings `"true"` / `"false"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePolicyBySystem {
    pub astrology: String,
    #[serde(deserialize_with = "bool_or_string")]
    pub human_design: bool,
    #[serde(deserialize_with = "bool_or_string")]
    pub gene_keys: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanDesignMapping {
    pub mandala_start_deg: f64,
    pub gate_width_deg: f64,
    pub line_width_deg: f64,
    pub interval_rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTimeSolverParams {
    pub sun_offset_deg: f64,
    pub stop_if_abs_sun_diff_deg_below: f64,
    pub stop_if_time_bracket_below_seconds: i64,
}

fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected true or false, got {other:?}"
            ))),
        },
    }
}
