//! Handler for destination implementations: create, get, update, soft delete, list.
//!
//! Every configuration is validated against the specification it implements before it is
//! persisted. Deleting an implementation deprecates the connections that write to it.

use std::sync::Arc;

use config_persistence::{ConfigRepository, DestinationConnectionImplementation};
use dataline_api::{
    ConnectionStatus, ConnectionUpdate, DestinationImplementationCreate,
    DestinationImplementationIdRequestBody, DestinationImplementationRead,
    DestinationImplementationReadList, DestinationImplementationUpdate, WorkspaceIdRequestBody,
};
use serde_json::Value;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{ConnectionsHandler, UuidGenerator};
use crate::core::Result;
use crate::validation::ConfigValidator;

pub struct DestinationImplementationsHandler {
    config_repository: ConfigRepository,
    validator: Arc<dyn ConfigValidator>,
    connections_handler: Arc<dyn ConnectionsHandler>,
    uuid_generator: UuidGenerator,
}

impl DestinationImplementationsHandler {
    pub fn new(
        config_repository: ConfigRepository,
        validator: Arc<dyn ConfigValidator>,
        connections_handler: Arc<dyn ConnectionsHandler>,
        uuid_generator: UuidGenerator,
    ) -> Self {
        Self {
            config_repository,
            validator,
            connections_handler,
            uuid_generator,
        }
    }

    /// Validates the configuration, assigns a new id and persists the implementation.
    #[instrument(skip(self, create), fields(workspace_id = %create.workspace_id))]
    pub async fn create_destination_implementation(
        &self,
        create: &DestinationImplementationCreate,
    ) -> Result<DestinationImplementationRead> {
        self.validate_destination_implementation(
            create.destination_specification_id,
            &create.connection_configuration,
        )
        .await?;

        let destination_implementation_id = (self.uuid_generator)();

        self.config_repository
            .write_destination_connection_implementation(&DestinationConnectionImplementation {
                workspace_id: create.workspace_id,
                destination_specification_id: create.destination_specification_id,
                destination_implementation_id,
                name: create.name.clone(),
                configuration: create.connection_configuration.clone(),
                tombstone: false,
            })
            .await?;

        info!(
            destination_implementation_id = %destination_implementation_id,
            destination_specification_id = %create.destination_specification_id,
            "Created destination implementation"
        );

        self.build_destination_implementation_read(destination_implementation_id)
            .await
    }

    /// Returns the implementation, including tombstoned ones.
    #[instrument(skip(self))]
    pub async fn get_destination_implementation(
        &self,
        request: &DestinationImplementationIdRequestBody,
    ) -> Result<DestinationImplementationRead> {
        self.build_destination_implementation_read(request.destination_implementation_id)
            .await
    }

    /// Replaces name and configuration. Workspace and specification are kept; the record is
    /// written back live (`tombstone = false`).
    #[instrument(skip(self, update), fields(destination_implementation_id = %update.destination_implementation_id))]
    pub async fn update_destination_implementation(
        &self,
        update: &DestinationImplementationUpdate,
    ) -> Result<DestinationImplementationRead> {
        let persisted = self
            .config_repository
            .get_destination_connection_implementation(update.destination_implementation_id)
            .await?;

        self.validate_destination_implementation(
            persisted.destination_specification_id,
            &update.connection_configuration,
        )
        .await?;

        let updated = DestinationConnectionImplementation {
            name: update.name.clone(),
            ..persisted
        }
        .with_configuration(update.connection_configuration.clone())
        .with_tombstone(false);

        self.config_repository
            .write_destination_connection_implementation(&updated)
            .await?;

        info!("Updated destination implementation");

        self.build_destination_implementation_read(update.destination_implementation_id)
            .await
    }

    /// Tombstones the implementation, then deprecates every connection in its workspace that
    /// writes to it. Schedule and sync schema of those connections are left unchanged.
    #[instrument(skip(self))]
    pub async fn delete_destination_implementation(
        &self,
        request: &DestinationImplementationIdRequestBody,
    ) -> Result<()> {
        let destination_implementation_id = request.destination_implementation_id;
        let persisted = self
            .config_repository
            .get_destination_connection_implementation(destination_implementation_id)
            .await?;
        let workspace_id = persisted.workspace_id;

        self.config_repository
            .write_destination_connection_implementation(&persisted.with_tombstone(true))
            .await?;

        let connections = self
            .connections_handler
            .list_connections_for_workspace(&WorkspaceIdRequestBody::new(workspace_id))
            .await?;

        let mut deprecated = 0usize;
        for connection in connections
            .connections
            .into_iter()
            .filter(|c| c.destination_implementation_id == destination_implementation_id)
        {
            let connection_update = ConnectionUpdate {
                connection_id: connection.connection_id,
                sync_schema: connection.sync_schema,
                schedule: connection.schedule,
                status: ConnectionStatus::Deprecated,
            };
            self.connections_handler
                .update_connection(&connection_update)
                .await?;
            deprecated += 1;
        }

        info!(
            workspace_id = %workspace_id,
            deprecated_connections = deprecated,
            "Deleted destination implementation"
        );
        Ok(())
    }

    /// Live (non-tombstoned) implementations in the workspace.
    #[instrument(skip(self))]
    pub async fn list_destination_implementations_for_workspace(
        &self,
        request: &WorkspaceIdRequestBody,
    ) -> Result<DestinationImplementationReadList> {
        let implementations = self
            .config_repository
            .list_destination_connection_implementations()
            .await?;

        let mut destinations = Vec::new();
        for implementation in implementations
            .into_iter()
            .filter(|i| i.workspace_id == request.workspace_id && !i.tombstone)
        {
            destinations.push(self.to_read(implementation).await?);
        }

        debug!(count = destinations.len(), "Listed destination implementations");
        Ok(DestinationImplementationReadList { destinations })
    }

    async fn validate_destination_implementation(
        &self,
        destination_specification_id: Uuid,
        configuration: &Value,
    ) -> Result<()> {
        let specification = self
            .config_repository
            .get_destination_connection_specification(destination_specification_id)
            .await?;
        self.validator.validate_config(&specification, configuration)?;
        Ok(())
    }

    async fn build_destination_implementation_read(
        &self,
        destination_implementation_id: Uuid,
    ) -> Result<DestinationImplementationRead> {
        let implementation = self
            .config_repository
            .get_destination_connection_implementation(destination_implementation_id)
            .await?;
        self.to_read(implementation).await
    }

    async fn to_read(
        &self,
        implementation: DestinationConnectionImplementation,
    ) -> Result<DestinationImplementationRead> {
        let specification = self
            .config_repository
            .get_destination_connection_specification(implementation.destination_specification_id)
            .await?;
        let destination = self
            .config_repository
            .get_standard_destination(specification.destination_id)
            .await?;

        Ok(DestinationImplementationRead {
            destination_id: destination.destination_id,
            destination_implementation_id: implementation.destination_implementation_id,
            workspace_id: implementation.workspace_id,
            destination_specification_id: implementation.destination_specification_id,
            name: implementation.name,
            destination_name: destination.name,
            connection_configuration: implementation.configuration,
        })
    }
}
