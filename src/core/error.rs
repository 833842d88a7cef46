use thiserror::Error;

use crate::core::types::ReferendumId;

/// Failures that indicate a programming or environment error.
///
/// Ordinary precondition failures (no quorum, proposal already resolved,
/// dissolved government) are not errors; see `legislature::Rejection`.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Referendum {0} is active but has no thresholds")]
    MissingThresholds(ReferendumId),

    #[error("Referendum not found: {0}")]
    UnknownReferendum(ReferendumId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
