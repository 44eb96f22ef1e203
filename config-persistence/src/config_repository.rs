//! Typed access to config records.
//!
//! Wraps a [`ConfigPersistence`] backend and (de)serializes each record kind with serde. Ids are
//! stored as their hyphenated UUID string.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ConfigError;
use crate::models::{
    DestinationConnectionImplementation, DestinationConnectionSpecification, StandardDestination,
    StandardSync, StandardSyncSchedule,
};
use crate::persistence::{ConfigPersistence, ConfigSchema};

#[derive(Clone)]
pub struct ConfigRepository {
    persistence: Arc<dyn ConfigPersistence>,
}

impl ConfigRepository {
    pub fn new(persistence: Arc<dyn ConfigPersistence>) -> Self {
        Self { persistence }
    }

    pub async fn get_standard_destination(
        &self,
        destination_id: Uuid,
    ) -> Result<StandardDestination, ConfigError> {
        self.get_config(ConfigSchema::StandardDestination, destination_id)
            .await
    }

    pub async fn list_standard_destinations(&self) -> Result<Vec<StandardDestination>, ConfigError> {
        self.list_configs(ConfigSchema::StandardDestination).await
    }

    pub async fn write_standard_destination(
        &self,
        destination: &StandardDestination,
    ) -> Result<(), ConfigError> {
        self.write_config(
            ConfigSchema::StandardDestination,
            destination.destination_id,
            destination,
        )
        .await
    }

    pub async fn get_destination_connection_specification(
        &self,
        destination_specification_id: Uuid,
    ) -> Result<DestinationConnectionSpecification, ConfigError> {
        self.get_config(
            ConfigSchema::DestinationConnectionSpecification,
            destination_specification_id,
        )
        .await
    }

    pub async fn list_destination_connection_specifications(
        &self,
    ) -> Result<Vec<DestinationConnectionSpecification>, ConfigError> {
        self.list_configs(ConfigSchema::DestinationConnectionSpecification)
            .await
    }

    pub async fn write_destination_connection_specification(
        &self,
        specification: &DestinationConnectionSpecification,
    ) -> Result<(), ConfigError> {
        self.write_config(
            ConfigSchema::DestinationConnectionSpecification,
            specification.destination_specification_id,
            specification,
        )
        .await
    }

    pub async fn get_destination_connection_implementation(
        &self,
        destination_implementation_id: Uuid,
    ) -> Result<DestinationConnectionImplementation, ConfigError> {
        self.get_config(
            ConfigSchema::DestinationConnectionImplementation,
            destination_implementation_id,
        )
        .await
    }

    pub async fn list_destination_connection_implementations(
        &self,
    ) -> Result<Vec<DestinationConnectionImplementation>, ConfigError> {
        self.list_configs(ConfigSchema::DestinationConnectionImplementation)
            .await
    }

    pub async fn write_destination_connection_implementation(
        &self,
        implementation: &DestinationConnectionImplementation,
    ) -> Result<(), ConfigError> {
        self.write_config(
            ConfigSchema::DestinationConnectionImplementation,
            implementation.destination_implementation_id,
            implementation,
        )
        .await
    }

    pub async fn get_standard_sync(&self, connection_id: Uuid) -> Result<StandardSync, ConfigError> {
        self.get_config(ConfigSchema::StandardSync, connection_id)
            .await
    }

    pub async fn list_standard_syncs(&self) -> Result<Vec<StandardSync>, ConfigError> {
        self.list_configs(ConfigSchema::StandardSync).await
    }

    pub async fn write_standard_sync(&self, sync: &StandardSync) -> Result<(), ConfigError> {
        self.write_config(ConfigSchema::StandardSync, sync.connection_id, sync)
            .await
    }

    pub async fn get_standard_sync_schedule(
        &self,
        connection_id: Uuid,
    ) -> Result<StandardSyncSchedule, ConfigError> {
        self.get_config(ConfigSchema::StandardSyncSchedule, connection_id)
            .await
    }

    pub async fn write_standard_sync_schedule(
        &self,
        schedule: &StandardSyncSchedule,
    ) -> Result<(), ConfigError> {
        self.write_config(
            ConfigSchema::StandardSyncSchedule,
            schedule.connection_id,
            schedule,
        )
        .await
    }

    async fn get_config<T: DeserializeOwned>(
        &self,
        schema: ConfigSchema,
        id: Uuid,
    ) -> Result<T, ConfigError> {
        let value = self.persistence.get_config(schema, &id.to_string()).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn list_configs<T: DeserializeOwned>(
        &self,
        schema: ConfigSchema,
    ) -> Result<Vec<T>, ConfigError> {
        self.persistence
            .list_configs(schema)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(ConfigError::from))
            .collect()
    }

    async fn write_config<T: Serialize + Sync>(
        &self,
        schema: ConfigSchema,
        id: Uuid,
        config: &T,
    ) -> Result<(), ConfigError> {
        let value = serde_json::to_value(config)?;
        self.persistence
            .write_config(schema, &id.to_string(), &value)
            .await
    }
}
