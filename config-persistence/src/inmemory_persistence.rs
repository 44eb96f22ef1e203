//! # In-Memory Config Persistence
//!
//! This module provides an in-memory implementation of the `ConfigPersistence` trait.
//!
//! Data is lost on restart; use it for tests and throwaway runs.
//!
//! ## Example
//!
//! ```rust
//! use config_persistence::{ConfigPersistence, ConfigSchema, InMemoryConfigPersistence};
//! use serde_json::json;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), config_persistence::ConfigError> {
//!     let persistence = InMemoryConfigPersistence::new();
//!     persistence
//!         .write_config(ConfigSchema::StandardDestination, "id-1", &json!({ "name": "Postgres" }))
//!         .await?;
//!     let config = persistence.get_config(ConfigSchema::StandardDestination, "id-1").await?;
//!     assert_eq!(config["name"], "Postgres");
//!     Ok(())
//! }
//! ```
//!
//! ## Thread Safety
//!
//! The store uses `Arc<RwLock<>>`; clones share the same records.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::ConfigError;
use crate::persistence::{ConfigPersistence, ConfigSchema};

#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigPersistence {
    configs: Arc<RwLock<HashMap<ConfigSchema, BTreeMap<String, Value>>>>,
}

impl InMemoryConfigPersistence {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records of the given kind.
    pub async fn len(&self, schema: ConfigSchema) -> usize {
        let configs = self.configs.read().await;
        configs.get(&schema).map_or(0, BTreeMap::len)
    }

    /// Removes every record.
    pub async fn clear(&self) {
        let mut configs = self.configs.write().await;
        configs.clear();
    }
}

#[async_trait]
impl ConfigPersistence for InMemoryConfigPersistence {
    async fn get_config(&self, schema: ConfigSchema, id: &str) -> Result<Value, ConfigError> {
        let configs = self.configs.read().await;
        configs
            .get(&schema)
            .and_then(|records| records.get(id))
            .cloned()
            .ok_or_else(|| ConfigError::not_found(schema, id))
    }

    async fn list_configs(&self, schema: ConfigSchema) -> Result<Vec<Value>, ConfigError> {
        let configs = self.configs.read().await;
        Ok(configs
            .get(&schema)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn write_config(
        &self,
        schema: ConfigSchema,
        id: &str,
        config: &Value,
    ) -> Result<(), ConfigError> {
        let mut configs = self.configs.write().await;
        configs
            .entry(schema)
            .or_default()
            .insert(id.to_string(), config.clone());
        Ok(())
    }
}
