//! A workspace's configured instance of a destination.
//!
//! Maps to `DESTINATION_CONNECTION_IMPLEMENTATION` records. Deletion is soft: the record is kept
//! with `tombstone` set.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConnectionImplementation {
    pub workspace_id: Uuid,
    pub destination_specification_id: Uuid,
    pub destination_implementation_id: Uuid,
    pub name: String,
    pub configuration: Value,
    #[serde(default)]
    pub tombstone: bool,
}

impl DestinationConnectionImplementation {
    /// Returns a copy with `tombstone` replaced.
    pub fn with_tombstone(mut self, tombstone: bool) -> Self {
        self.tombstone = tombstone;
        self
    }

    /// Returns a copy with `configuration` replaced.
    pub fn with_configuration(mut self, configuration: Value) -> Self {
        self.configuration = configuration;
        self
    }
}
