//! Standard destinations and the specification describing their configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationIdRequestBody {
    pub destination_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRead {
    pub destination_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationReadList {
    pub destinations: Vec<DestinationRead>,
}

/// The JSON schema a destination implementation's configuration must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSpecificationRead {
    pub destination_id: Uuid,
    pub destination_specification_id: Uuid,
    pub documentation_url: String,
    pub connection_specification: Value,
}
