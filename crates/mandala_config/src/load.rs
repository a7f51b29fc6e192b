//! Reading a case document and applying canon defaults.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::canon::{Canon, read_json};
use crate::error::ConfigError;
use crate::input::CaseInput;
use crate::merge::merge_json;

/// Merge canon defaults under a raw case document and deserialize it.
///
/// Caller-supplied values win over canon values.
pub fn apply_canon(raw: Value, canon: &Canon) -> Result<CaseInput, ConfigError> {
    let mut merged = canon.contract_defaults();
    merge_json(&mut merged, raw);
    serde_json::from_value(merged).map_err(|source| ConfigError::Json {
        context: "case input".to_string(),
        source,
    })
}

/// Read the case document at `path` and apply canon defaults.
pub fn load_case(path: &Path, canon: &Canon) -> Result<CaseInput, ConfigError> {
    let raw: Value = read_json(path)?;
    let case = apply_canon(raw, canon)?;
    info!(
        path = %path.display(),
        case_id = case.case_id.as_deref().unwrap_or("-"),
        "case loaded"
    );
    Ok(case)
}
