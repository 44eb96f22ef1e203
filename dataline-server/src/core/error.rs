//! Error types for the server.
//!
//! [`ServerError`] is what every handler returns; persistence and validation failures are
//! wrapped unchanged.

use config_persistence::ConfigError;
use thiserror::Error;

use crate::validation::JsonValidationError;

/// Top-level error for handlers (validation, config lookup/persistence, bad request, IO).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Validation error: {0}")]
    Validation(#[from] JsonValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// True when a looked-up config record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Config(err) if err.is_not_found())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for handler operations; uses [`ServerError`].
pub type Result<T> = std::result::Result<T, ServerError>;
