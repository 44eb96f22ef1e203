//! # Config Persistence
//!
//! This module defines the storage interface underneath [`crate::ConfigRepository`].
//!
//! ## ConfigPersistence Trait
//!
//! Records are stored as JSON blobs, grouped by [`ConfigSchema`] and keyed by their id.
//!
//! - `get_config(schema, id)` returns the blob or [`ConfigError::NotFound`].
//! - `list_configs(schema)` returns every blob of that kind, ordered by id.
//! - `write_config(schema, id, value)` inserts or replaces.
//!
//! ### Implementations
//!
//! - **InMemoryConfigPersistence**: tests and throwaway runs
//! - **SqliteConfigPersistence**: one `configs` table keyed by `(config_type, config_id)`

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// The kinds of config record the server persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigSchema {
    StandardDestination,
    DestinationConnectionSpecification,
    DestinationConnectionImplementation,
    StandardSync,
    StandardSyncSchedule,
}

impl ConfigSchema {
    /// Stable name used as the storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSchema::StandardDestination => "STANDARD_DESTINATION",
            ConfigSchema::DestinationConnectionSpecification => {
                "DESTINATION_CONNECTION_SPECIFICATION"
            }
            ConfigSchema::DestinationConnectionImplementation => {
                "DESTINATION_CONNECTION_IMPLEMENTATION"
            }
            ConfigSchema::StandardSync => "STANDARD_SYNC",
            ConfigSchema::StandardSyncSchedule => "STANDARD_SYNC_SCHEDULE",
        }
    }
}

impl fmt::Display for ConfigSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for storing and retrieving raw config records.
#[async_trait]
pub trait ConfigPersistence: Send + Sync {
    /// Returns the record, or `ConfigError::NotFound` if there is none.
    async fn get_config(&self, schema: ConfigSchema, id: &str) -> Result<Value, ConfigError>;

    /// Returns every record of the given kind, ordered by id.
    async fn list_configs(&self, schema: ConfigSchema) -> Result<Vec<Value>, ConfigError>;

    /// Inserts the record or replaces the existing one with the same id.
    async fn write_config(
        &self,
        schema: ConfigSchema,
        id: &str,
        config: &Value,
    ) -> Result<(), ConfigError>;
}
