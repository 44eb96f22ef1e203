//! End-to-end tests through `build_handlers`: real schema validation, real connections handler.

mod common;

use std::io::Write;
use std::sync::Arc;

use common::{api_key_schema, generate_sync_schema, test_implementation_json};
use config_persistence::{
    ConfigPersistence, DestinationConnectionSpecification, InMemoryConfigPersistence,
    StandardDestination,
};
use dataline_api::{
    ConnectionCreate, ConnectionIdRequestBody, ConnectionSchedule, ConnectionStatus,
    DestinationImplementationCreate, DestinationImplementationIdRequestBody, SyncMode, TimeUnit,
    WorkspaceIdRequestBody,
};
use dataline_server::{
    build_handlers, create_config_persistence, seed_definitions, ConfigStoreType,
    DestinationDefinitions, ServerConfig, ServerHandlers,
};
use serde_json::json;
use tempfile::{NamedTempFile, TempDir};
use uuid::Uuid;

fn definitions() -> DestinationDefinitions {
    let destination_id = Uuid::new_v4();
    DestinationDefinitions {
        destinations: vec![StandardDestination {
            destination_id,
            name: "Postgres".to_string(),
        }],
        destination_specifications: vec![DestinationConnectionSpecification {
            destination_specification_id: Uuid::new_v4(),
            destination_id,
            documentation_url: "https://docs.example.com/destinations/postgres".to_string(),
            specification: api_key_schema(),
        }],
    }
}

async fn seeded_handlers(persistence: Arc<dyn ConfigPersistence>) -> (ServerHandlers, DestinationDefinitions) {
    let handlers = build_handlers(persistence);
    let definitions = definitions();
    seed_definitions(&handlers.config_repository, &definitions)
        .await
        .unwrap();
    (handlers, definitions)
}

/// **Test: Deleting a destination implementation deprecates its connections end to end**
///
/// **Setup:** Seeded definitions; one implementation with one scheduled connection.
///
/// **Action:** Delete the implementation.
///
/// **Expected:** Implementation drops out of the workspace listing but is still readable; the
/// connection is deprecated with its schedule kept and no longer listed.
#[tokio::test]
async fn test_delete_cascades_to_connections() {
    let (handlers, definitions) =
        seeded_handlers(Arc::new(InMemoryConfigPersistence::new())).await;
    let workspace_id = Uuid::new_v4();
    let specification = &definitions.destination_specifications[0];

    let implementation = handlers
        .destination_implementations
        .create_destination_implementation(&DestinationImplementationCreate {
            workspace_id,
            destination_specification_id: specification.destination_specification_id,
            name: "warehouse".to_string(),
            connection_configuration: test_implementation_json(),
        })
        .await
        .unwrap();
    assert_eq!(implementation.destination_name, "Postgres");

    let schedule = Some(ConnectionSchedule {
        units: 6,
        time_unit: TimeUnit::Hours,
    });
    let connection = handlers
        .connections
        .create_connection(&ConnectionCreate {
            source_implementation_id: Uuid::new_v4(),
            destination_implementation_id: implementation.destination_implementation_id,
            name: "orders".to_string(),
            sync_mode: SyncMode::Append,
            sync_schema: generate_sync_schema(),
            schedule,
            status: ConnectionStatus::Active,
        })
        .await
        .unwrap();

    handlers
        .destination_implementations
        .delete_destination_implementation(&DestinationImplementationIdRequestBody::new(
            implementation.destination_implementation_id,
        ))
        .await
        .unwrap();

    let workspace = WorkspaceIdRequestBody::new(workspace_id);
    let listed = handlers
        .destination_implementations
        .list_destination_implementations_for_workspace(&workspace)
        .await
        .unwrap();
    assert!(listed.destinations.is_empty());

    let still_readable = handlers
        .destination_implementations
        .get_destination_implementation(&DestinationImplementationIdRequestBody::new(
            implementation.destination_implementation_id,
        ))
        .await
        .unwrap();
    assert_eq!(still_readable, implementation);

    let deprecated = handlers
        .connections
        .get_connection(&ConnectionIdRequestBody {
            connection_id: connection.connection_id,
        })
        .await
        .unwrap();
    assert_eq!(deprecated.status, ConnectionStatus::Deprecated);
    assert_eq!(deprecated.schedule, schedule);
    assert_eq!(deprecated.sync_schema, generate_sync_schema());

    let connections = handlers
        .connections
        .list_connections_for_workspace(&workspace)
        .await
        .unwrap();
    assert!(connections.connections.is_empty());
}

/// **Test: Schema validation rejects a configuration missing a required field**
#[tokio::test]
async fn test_create_with_schema_violation() {
    let (handlers, definitions) =
        seeded_handlers(Arc::new(InMemoryConfigPersistence::new())).await;
    let workspace_id = Uuid::new_v4();

    let err = handlers
        .destination_implementations
        .create_destination_implementation(&DestinationImplementationCreate {
            workspace_id,
            destination_specification_id: definitions.destination_specifications[0]
                .destination_specification_id,
            name: "warehouse".to_string(),
            connection_configuration: json!({ "port": 0 }),
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    let listed = handlers
        .destination_implementations
        .list_destination_implementations_for_workspace(&WorkspaceIdRequestBody::new(
            workspace_id,
        ))
        .await
        .unwrap();
    assert!(listed.destinations.is_empty());
}

/// **Test: SQLite store keeps implementations across handler rebuilds**
///
/// **Setup:** `CONFIG_STORE_TYPE=sqlite` config pointing into a temp dir (parent dir missing).
///
/// **Expected:** An implementation created through the first set of handlers is listed by a
/// second set built over a fresh persistence on the same file.
#[tokio::test]
async fn test_sqlite_store_persists_across_restarts() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        database_url: dir
            .path()
            .join("nested")
            .join("dataline.db")
            .to_string_lossy()
            .into_owned(),
        config_store_type: ConfigStoreType::Sqlite,
        log_file: dir.path().join("dataline.log").to_string_lossy().into_owned(),
    };
    let workspace_id = Uuid::new_v4();

    let (handlers, definitions) =
        seeded_handlers(create_config_persistence(&config).await.unwrap()).await;
    let created = handlers
        .destination_implementations
        .create_destination_implementation(&DestinationImplementationCreate {
            workspace_id,
            destination_specification_id: definitions.destination_specifications[0]
                .destination_specification_id,
            name: "warehouse".to_string(),
            connection_configuration: test_implementation_json(),
        })
        .await
        .unwrap();
    drop(handlers);

    let reopened = build_handlers(create_config_persistence(&config).await.unwrap());
    let listed = reopened
        .destination_implementations
        .list_destination_implementations_for_workspace(&WorkspaceIdRequestBody::new(
            workspace_id,
        ))
        .await
        .unwrap();

    assert_eq!(listed.destinations, vec![created]);
}

/// **Test: Seed file is parsed and written through the repository**
#[tokio::test]
async fn test_seed_from_file() {
    let expected = definitions();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&expected).unwrap()).unwrap();

    let parsed = DestinationDefinitions::from_file(file.path()).unwrap();
    let handlers = build_handlers(Arc::new(InMemoryConfigPersistence::new()));
    seed_definitions(&handlers.config_repository, &parsed)
        .await
        .unwrap();

    let destinations = handlers.destinations.list_destinations().await.unwrap();
    assert_eq!(destinations.destinations.len(), 1);
    assert_eq!(destinations.destinations[0].name, "Postgres");
    assert_eq!(
        parsed.destination_specifications,
        expected.destination_specifications
    );
}

#[test]
fn test_seed_file_missing() {
    let dir = TempDir::new().unwrap();
    let result = DestinationDefinitions::from_file(&dir.path().join("absent.json"));
    assert!(result.is_err());
}
