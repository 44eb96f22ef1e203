//! Component factory: builds the persistence backend and the handlers from config.

use std::sync::Arc;

use anyhow::Result;
use config_persistence::{
    ConfigPersistence, ConfigRepository, InMemoryConfigPersistence, SqliteConfigPersistence,
};
use tracing::{error, info, instrument};

use crate::config::{ConfigStoreType, ServerConfig};
use crate::handlers::{
    random_uuid_generator, ConfigConnectionsHandler, ConnectionsHandler,
    DestinationImplementationsHandler, DestinationSpecificationsHandler, DestinationsHandler,
    UuidGenerator,
};
use crate::validation::{ConfigValidator, IntegrationSchemaValidation};

/// Every handler the server exposes, sharing one config repository.
pub struct ServerHandlers {
    pub config_repository: ConfigRepository,
    pub destinations: DestinationsHandler,
    pub destination_specifications: DestinationSpecificationsHandler,
    pub destination_implementations: DestinationImplementationsHandler,
    pub connections: Arc<dyn ConnectionsHandler>,
}

/// Creates the config persistence backend selected by `CONFIG_STORE_TYPE`.
#[instrument(skip(config))]
pub async fn create_config_persistence(config: &ServerConfig) -> Result<Arc<dyn ConfigPersistence>> {
    let persistence: Arc<dyn ConfigPersistence> = match config.config_store_type {
        ConfigStoreType::Sqlite => {
            info!(database_url = %config.database_url, "Using SQLite config persistence");
            if let Some(parent) = std::path::Path::new(&config.database_url).parent() {
                if !config.database_url.starts_with("sqlite:") && !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Arc::new(
                SqliteConfigPersistence::new(&config.database_url)
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Failed to initialize SQLite config persistence");
                        anyhow::anyhow!("Failed to initialize SQLite config persistence: {}", e)
                    })?,
            )
        }
        ConfigStoreType::Memory => {
            info!("Using in-memory config persistence");
            Arc::new(InMemoryConfigPersistence::new())
        }
    };
    Ok(persistence)
}

/// Wires the handlers with the JSON-schema validator and random ids.
pub fn build_handlers(persistence: Arc<dyn ConfigPersistence>) -> ServerHandlers {
    build_handlers_with(
        persistence,
        Arc::new(IntegrationSchemaValidation::new()),
        random_uuid_generator(),
    )
}

/// Wires the handlers with an explicit validator and id generator.
pub fn build_handlers_with(
    persistence: Arc<dyn ConfigPersistence>,
    validator: Arc<dyn ConfigValidator>,
    uuid_generator: UuidGenerator,
) -> ServerHandlers {
    let config_repository = ConfigRepository::new(persistence);
    let connections: Arc<dyn ConnectionsHandler> = Arc::new(ConfigConnectionsHandler::new(
        config_repository.clone(),
        uuid_generator.clone(),
    ));

    ServerHandlers {
        destinations: DestinationsHandler::new(config_repository.clone()),
        destination_specifications: DestinationSpecificationsHandler::new(
            config_repository.clone(),
        ),
        destination_implementations: DestinationImplementationsHandler::new(
            config_repository.clone(),
            validator,
            connections.clone(),
            uuid_generator,
        ),
        connections,
        config_repository,
    }
}
