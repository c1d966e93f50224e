//! WhereBus Error Types
//!
//! Centralized error handling. Only configuration and envelope problems are
//! hard errors; collaborator failures degrade to "absent" at the call site
//! and never reach the response layer.

use thiserror::Error;

/// Central error type for WhereBus
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed platform event: {0}")]
    Envelope(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for WhereBus operations
pub type SkillResult<T> = Result<T, SkillError>;
