//! Error types for input loading and contract validation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("canon file not found: {0}")]
    CanonFileMissing(PathBuf),
    #[error("invalid canon data: {0}")]
    InvalidCanon(String),
    /// An engine-contract field holds an unsupported value.
    #[error("contract violation: {field} must be {expected}, got {actual}")]
    ContractViolation {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error("settings: {0}")]
    Settings(#[from] config::ConfigError),
}

impl ConfigError {
    pub(crate) fn violation(
        field: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::ContractViolation {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
