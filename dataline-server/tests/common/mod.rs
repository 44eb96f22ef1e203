//! Test doubles and fixtures shared by the handler integration tests.
//!
//! - `RecordingConfigPersistence`: in-memory store that also keeps every write in order.
//! - `MockValidator`: records each validation call; can be told to reject.
//! - `MockConnectionsHandler`: returns a preset connection list and records list/update calls.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use config_persistence::{
    ConfigError, ConfigPersistence, ConfigSchema, DestinationConnectionImplementation,
    DestinationConnectionSpecification, InMemoryConfigPersistence, StandardDestination,
};
use dataline_api::{
    ConnectionCreate, ConnectionIdRequestBody, ConnectionRead, ConnectionReadList,
    ConnectionSchedule, ConnectionStatus, ConnectionUpdate, DataType, DestinationImplementationRead,
    SourceSchema, SourceSchemaColumn, SourceSchemaTable, SyncMode, TimeUnit,
    WorkspaceIdRequestBody,
};
use dataline_server::{
    ConfigValidator, ConnectionsHandler, JsonValidationError, Result, ServerError, UuidGenerator,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Wraps [`InMemoryConfigPersistence`] and records every `write_config` call.
#[derive(Debug, Clone, Default)]
pub struct RecordingConfigPersistence {
    inner: InMemoryConfigPersistence,
    writes: Arc<Mutex<Vec<(ConfigSchema, String, Value)>>>,
}

impl RecordingConfigPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, in call order.
    pub fn writes(&self) -> Vec<(ConfigSchema, String, Value)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn writes_of(&self, schema: ConfigSchema) -> Vec<(String, Value)> {
        self.writes()
            .into_iter()
            .filter(|(s, _, _)| *s == schema)
            .map(|(_, id, value)| (id, value))
            .collect()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().unwrap().clear();
    }
}

#[async_trait]
impl ConfigPersistence for RecordingConfigPersistence {
    async fn get_config(&self, schema: ConfigSchema, id: &str) -> std::result::Result<Value, ConfigError> {
        self.inner.get_config(schema, id).await
    }

    async fn list_configs(&self, schema: ConfigSchema) -> std::result::Result<Vec<Value>, ConfigError> {
        self.inner.list_configs(schema).await
    }

    async fn write_config(
        &self,
        schema: ConfigSchema,
        id: &str,
        config: &Value,
    ) -> std::result::Result<(), ConfigError> {
        self.writes
            .lock()
            .unwrap()
            .push((schema, id.to_string(), config.clone()));
        self.inner.write_config(schema, id, config).await
    }
}

/// Validator double: accepts everything unless built with [`MockValidator::rejecting`].
#[derive(Debug, Default)]
pub struct MockValidator {
    calls: Mutex<Vec<(DestinationConnectionSpecification, Value)>>,
    failure: Option<JsonValidationError>,
}

impl MockValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(error: JsonValidationError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<(DestinationConnectionSpecification, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ConfigValidator for MockValidator {
    fn validate_config(
        &self,
        specification: &DestinationConnectionSpecification,
        configuration: &Value,
    ) -> std::result::Result<(), JsonValidationError> {
        self.calls
            .lock()
            .unwrap()
            .push((specification.clone(), configuration.clone()));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Connections handler double with a fixed workspace listing.
#[derive(Debug, Default)]
pub struct MockConnectionsHandler {
    connections: ConnectionReadList,
    list_requests: Mutex<Vec<WorkspaceIdRequestBody>>,
    updates: Mutex<Vec<ConnectionUpdate>>,
    update_call_count: AtomicUsize,
}

impl MockConnectionsHandler {
    pub fn new(connections: Vec<ConnectionRead>) -> Self {
        Self {
            connections: ConnectionReadList { connections },
            ..Self::default()
        }
    }

    pub fn list_requests(&self) -> Vec<WorkspaceIdRequestBody> {
        self.list_requests.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<ConnectionUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn get_update_call_count(&self) -> usize {
        self.update_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionsHandler for MockConnectionsHandler {
    async fn create_connection(&self, _create: &ConnectionCreate) -> Result<ConnectionRead> {
        Err(ServerError::InvalidRequest(
            "create_connection is not supported by MockConnectionsHandler".to_string(),
        ))
    }

    async fn update_connection(&self, update: &ConnectionUpdate) -> Result<ConnectionRead> {
        self.update_call_count.fetch_add(1, Ordering::SeqCst);
        self.updates.lock().unwrap().push(update.clone());

        let existing = self
            .connections
            .connections
            .iter()
            .find(|c| c.connection_id == update.connection_id)
            .cloned()
            .ok_or_else(|| ServerError::InvalidRequest("unknown connection".to_string()))?;
        Ok(ConnectionRead {
            sync_schema: update.sync_schema.clone(),
            schedule: update.schedule,
            status: update.status,
            ..existing
        })
    }

    async fn get_connection(&self, request: &ConnectionIdRequestBody) -> Result<ConnectionRead> {
        self.connections
            .connections
            .iter()
            .find(|c| c.connection_id == request.connection_id)
            .cloned()
            .ok_or_else(|| ServerError::InvalidRequest("unknown connection".to_string()))
    }

    async fn list_connections_for_workspace(
        &self,
        request: &WorkspaceIdRequestBody,
    ) -> Result<ConnectionReadList> {
        self.list_requests.lock().unwrap().push(request.clone());
        Ok(self.connections.clone())
    }
}

/// Generator that always hands out `id`.
pub fn fixed_uuid_generator(id: Uuid) -> UuidGenerator {
    Arc::new(move || id)
}

/// Generator that hands out `ids` in order, then falls back to random ids.
pub fn sequence_uuid_generator(ids: Vec<Uuid>) -> UuidGenerator {
    let next = AtomicUsize::new(0);
    Arc::new(move || {
        let i = next.fetch_add(1, Ordering::SeqCst);
        ids.get(i).copied().unwrap_or_else(Uuid::new_v4)
    })
}

pub fn generate_destination() -> StandardDestination {
    StandardDestination {
        destination_id: Uuid::new_v4(),
        name: "db2".to_string(),
    }
}

pub fn api_key_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["apiKey"],
        "properties": {
            "apiKey": { "type": "string" },
            "port": { "type": "integer", "minimum": 1 }
        }
    })
}

pub fn generate_destination_specification(destination_id: Uuid) -> DestinationConnectionSpecification {
    DestinationConnectionSpecification {
        destination_specification_id: Uuid::new_v4(),
        destination_id,
        documentation_url: "https://docs.example.com/destinations/db2".to_string(),
        specification: api_key_schema(),
    }
}

pub fn test_implementation_json() -> Value {
    json!({ "apiKey": "123-abc", "port": 5432 })
}

pub fn generate_destination_implementation(
    workspace_id: Uuid,
    destination_specification_id: Uuid,
) -> DestinationConnectionImplementation {
    DestinationConnectionImplementation {
        workspace_id,
        destination_specification_id,
        destination_implementation_id: Uuid::new_v4(),
        name: "my db2 instance".to_string(),
        configuration: test_implementation_json(),
        tombstone: false,
    }
}

pub fn expected_destination_implementation_read(
    destination: &StandardDestination,
    implementation: &DestinationConnectionImplementation,
) -> DestinationImplementationRead {
    DestinationImplementationRead {
        destination_id: destination.destination_id,
        destination_implementation_id: implementation.destination_implementation_id,
        workspace_id: implementation.workspace_id,
        destination_specification_id: implementation.destination_specification_id,
        name: implementation.name.clone(),
        destination_name: destination.name.clone(),
        connection_configuration: implementation.configuration.clone(),
    }
}

pub fn generate_sync_schema() -> SourceSchema {
    SourceSchema {
        tables: vec![SourceSchemaTable {
            name: "users".to_string(),
            selected: true,
            columns: vec![
                SourceSchemaColumn {
                    name: "id".to_string(),
                    data_type: DataType::Number,
                    selected: true,
                },
                SourceSchemaColumn {
                    name: "email".to_string(),
                    data_type: DataType::String,
                    selected: false,
                },
            ],
        }],
    }
}

/// An active, hourly-scheduled connection writing into `destination_implementation_id`.
pub fn generate_connection_read(destination_implementation_id: Uuid) -> ConnectionRead {
    ConnectionRead {
        connection_id: Uuid::new_v4(),
        name: "presto to db2".to_string(),
        source_implementation_id: Uuid::new_v4(),
        destination_implementation_id,
        sync_mode: SyncMode::Append,
        sync_schema: generate_sync_schema(),
        schedule: Some(ConnectionSchedule {
            units: 1,
            time_unit: TimeUnit::Hours,
        }),
        status: ConnectionStatus::Active,
    }
}
