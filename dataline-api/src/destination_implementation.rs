//! Destination implementation models: a workspace's configured instance of a destination connector.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Payload for creating an implementation. The id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationImplementationCreate {
    pub workspace_id: Uuid,
    pub destination_specification_id: Uuid,
    pub name: String,
    pub connection_configuration: Value,
}

/// Payload for updating an implementation. Workspace and specification cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationImplementationUpdate {
    pub destination_implementation_id: Uuid,
    pub name: String,
    pub connection_configuration: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationImplementationIdRequestBody {
    pub destination_implementation_id: Uuid,
}

impl DestinationImplementationIdRequestBody {
    pub fn new(destination_implementation_id: Uuid) -> Self {
        Self {
            destination_implementation_id,
        }
    }
}

/// Read view of an implementation, denormalized with the destination it configures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationImplementationRead {
    pub destination_id: Uuid,
    pub destination_implementation_id: Uuid,
    pub workspace_id: Uuid,
    pub destination_specification_id: Uuid,
    pub name: String,
    /// Name of the standard destination, joined through the specification.
    pub destination_name: String,
    pub connection_configuration: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationImplementationReadList {
    pub destinations: Vec<DestinationImplementationRead>,
}
