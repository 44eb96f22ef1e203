//! Config error types.
//!
//! Used by persistence backends, the config repository, and callers of both.

use thiserror::Error;

use crate::persistence::ConfigSchema;

/// Errors that can occur when reading or writing config records.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config not found: {schema} {id}")]
    NotFound { schema: ConfigSchema, id: String },
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn not_found(schema: ConfigSchema, id: impl Into<String>) -> Self {
        Self::NotFound {
            schema,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for ConfigError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
