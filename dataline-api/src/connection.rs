//! Connection models: a sync from a source implementation into a destination implementation,
//! with its selected schema, schedule and status.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a connection. `Deprecated` connections are hidden from workspace listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    Inactive,
    Deprecated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    FullRefresh,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

/// Run every `units` `time_unit`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSchedule {
    pub units: u64,
    pub time_unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Number,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSchemaColumn {
    pub name: String,
    pub data_type: DataType,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSchemaTable {
    pub name: String,
    pub columns: Vec<SourceSchemaColumn>,
    pub selected: bool,
}

/// The tables and columns selected for syncing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSchema {
    pub tables: Vec<SourceSchemaTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCreate {
    pub source_implementation_id: Uuid,
    pub destination_implementation_id: Uuid,
    pub name: String,
    pub sync_mode: SyncMode,
    pub sync_schema: SourceSchema,
    /// `None` makes the connection manual.
    pub schedule: Option<ConnectionSchedule>,
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionUpdate {
    pub connection_id: Uuid,
    pub sync_schema: SourceSchema,
    pub schedule: Option<ConnectionSchedule>,
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionIdRequestBody {
    pub connection_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRead {
    pub connection_id: Uuid,
    pub name: String,
    pub source_implementation_id: Uuid,
    pub destination_implementation_id: Uuid,
    pub sync_mode: SyncMode,
    pub sync_schema: SourceSchema,
    pub schedule: Option<ConnectionSchedule>,
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReadList {
    pub connections: Vec<ConnectionRead>,
}
