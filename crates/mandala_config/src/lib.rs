//! Case input model, canon data and engine contract validation.
//!
//! A case document is read as raw JSON, canon defaults are merged beneath
//! it (caller values win), and the result is deserialized into
//! [`CaseInput`]. [`validate_contract`] then checks every contract field
//! and yields typed chart parameters.

pub mod canon;
pub mod contract;
pub mod error;
pub mod input;
pub mod load;
pub mod merge;
pub mod settings;

pub use canon::{Canon, CanonPaths, MandalaConstants, NodePolicy};
pub use contract::{ValidatedContract, validate_contract};
pub use error::ConfigError;
pub use input::{
    BirthInput, CaseInput, DesignTimeSolverParams, EngineContract, HumanDesignMapping,
    NodePolicyBySystem,
};
pub use load::{apply_canon, load_case};
pub use merge::merge_json;
pub use settings::Settings;
