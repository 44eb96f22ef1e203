//! Connections: syncs from a source implementation into a destination implementation.
//!
//! [`ConnectionsHandler`] is the seam other handlers depend on; [`ConfigConnectionsHandler`]
//! backs it with the config repository, storing each connection as a `StandardSync` plus a
//! `StandardSyncSchedule` under the same id.

use async_trait::async_trait;
use config_persistence::{ConfigRepository, StandardSync, StandardSyncSchedule, SyncStatus};
use dataline_api::{
    ConnectionCreate, ConnectionIdRequestBody, ConnectionRead, ConnectionReadList,
    ConnectionUpdate, WorkspaceIdRequestBody,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::UuidGenerator;
use crate::converters;
use crate::core::Result;

#[async_trait]
pub trait ConnectionsHandler: Send + Sync {
    async fn create_connection(&self, create: &ConnectionCreate) -> Result<ConnectionRead>;

    /// Replaces sync schema, schedule and status of an existing connection.
    async fn update_connection(&self, update: &ConnectionUpdate) -> Result<ConnectionRead>;

    async fn get_connection(&self, request: &ConnectionIdRequestBody) -> Result<ConnectionRead>;

    /// Non-deprecated connections whose destination implementation belongs to the workspace.
    async fn list_connections_for_workspace(
        &self,
        request: &WorkspaceIdRequestBody,
    ) -> Result<ConnectionReadList>;
}

pub struct ConfigConnectionsHandler {
    config_repository: ConfigRepository,
    uuid_generator: UuidGenerator,
}

impl ConfigConnectionsHandler {
    pub fn new(config_repository: ConfigRepository, uuid_generator: UuidGenerator) -> Self {
        Self {
            config_repository,
            uuid_generator,
        }
    }

    async fn build_connection_read(&self, connection_id: Uuid) -> Result<ConnectionRead> {
        let sync = self.config_repository.get_standard_sync(connection_id).await?;
        let schedule = self
            .config_repository
            .get_standard_sync_schedule(connection_id)
            .await?;

        Ok(ConnectionRead {
            connection_id: sync.connection_id,
            name: sync.name,
            source_implementation_id: sync.source_implementation_id,
            destination_implementation_id: sync.destination_implementation_id,
            sync_mode: converters::to_api_sync_mode(sync.sync_mode),
            sync_schema: converters::to_api_schema(&sync.schema),
            schedule: schedule.schedule.map(converters::to_api_schedule),
            status: converters::to_api_status(sync.status),
        })
    }

    async fn is_sync_in_workspace(&self, workspace_id: Uuid, sync: &StandardSync) -> Result<bool> {
        let destination = self
            .config_repository
            .get_destination_connection_implementation(sync.destination_implementation_id)
            .await?;
        Ok(destination.workspace_id == workspace_id)
    }
}

#[async_trait]
impl ConnectionsHandler for ConfigConnectionsHandler {
    #[instrument(skip(self, create), fields(destination_implementation_id = %create.destination_implementation_id))]
    async fn create_connection(&self, create: &ConnectionCreate) -> Result<ConnectionRead> {
        // the destination must exist for the connection to be listed under its workspace
        self.config_repository
            .get_destination_connection_implementation(create.destination_implementation_id)
            .await?;

        let connection_id = (self.uuid_generator)();

        self.config_repository
            .write_standard_sync(&StandardSync {
                connection_id,
                name: create.name.clone(),
                source_implementation_id: create.source_implementation_id,
                destination_implementation_id: create.destination_implementation_id,
                status: converters::to_persisted_status(create.status),
                sync_mode: converters::to_persisted_sync_mode(create.sync_mode),
                schema: converters::to_persisted_schema(&create.sync_schema),
            })
            .await?;
        self.config_repository
            .write_standard_sync_schedule(&StandardSyncSchedule::new(
                connection_id,
                create.schedule.map(converters::to_persisted_schedule),
            ))
            .await?;

        info!(connection_id = %connection_id, "Created connection");
        self.build_connection_read(connection_id).await
    }

    #[instrument(skip(self, update), fields(connection_id = %update.connection_id))]
    async fn update_connection(&self, update: &ConnectionUpdate) -> Result<ConnectionRead> {
        let persisted = self
            .config_repository
            .get_standard_sync(update.connection_id)
            .await?;

        // the schedule record must already exist
        self.config_repository
            .get_standard_sync_schedule(update.connection_id)
            .await?;

        let sync = StandardSync {
            schema: converters::to_persisted_schema(&update.sync_schema),
            status: converters::to_persisted_status(update.status),
            ..persisted
        };
        self.config_repository.write_standard_sync(&sync).await?;
        self.config_repository
            .write_standard_sync_schedule(&StandardSyncSchedule::new(
                update.connection_id,
                update.schedule.map(converters::to_persisted_schedule),
            ))
            .await?;

        info!(status = ?update.status, "Updated connection");
        self.build_connection_read(update.connection_id).await
    }

    #[instrument(skip(self))]
    async fn get_connection(&self, request: &ConnectionIdRequestBody) -> Result<ConnectionRead> {
        self.build_connection_read(request.connection_id).await
    }

    #[instrument(skip(self))]
    async fn list_connections_for_workspace(
        &self,
        request: &WorkspaceIdRequestBody,
    ) -> Result<ConnectionReadList> {
        let mut connections = Vec::new();
        for sync in self.config_repository.list_standard_syncs().await? {
            if sync.status == SyncStatus::Deprecated {
                continue;
            }
            if !self.is_sync_in_workspace(request.workspace_id, &sync).await? {
                continue;
            }
            connections.push(self.build_connection_read(sync.connection_id).await?);
        }

        debug!(count = connections.len(), "Listed connections");
        Ok(ConnectionReadList { connections })
    }
}
