//! Configuration schema for one destination type.
//!
//! Maps to `DESTINATION_CONNECTION_SPECIFICATION` records; `specification` is a JSON schema that
//! every implementation's configuration is validated against.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConnectionSpecification {
    pub destination_specification_id: Uuid,
    pub destination_id: Uuid,
    #[serde(default)]
    pub documentation_url: String,
    pub specification: Value,
}
