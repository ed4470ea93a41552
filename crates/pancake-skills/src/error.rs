//! Error types for the skills subsystem.

use std::path::PathBuf;

/// Skill-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("skill not found: `{0}`")]
    NotFound(String),

    #[error("invalid skill file `{path}`: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("missing required field `{field}` in skill file `{path}`")]
    MissingField { path: PathBuf, field: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillError>;
