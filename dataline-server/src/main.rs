//! dataline CLI: seed destination definitions, manage destination implementations and
//! connections. Config from env (`.env` supported).

use anyhow::{Context, Result};
use clap::Parser;
use dataline_api::{
    ConnectionCreate, ConnectionIdRequestBody, ConnectionStatus, DestinationIdRequestBody,
    DestinationImplementationCreate, DestinationImplementationIdRequestBody,
    DestinationImplementationUpdate, SourceSchema, WorkspaceIdRequestBody,
};
use dataline_server::cli::{
    schedule_from_args, ConnectionCommands, DestinationCommands, ImplementationCommands,
};
use dataline_server::{
    build_handlers, create_config_persistence, init_tracing, load_config, seed_definitions, Cli,
    Commands, DestinationDefinitions, ServerHandlers,
};
use serde::Serialize;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config()?;
    init_tracing(&config.log_file)?;

    let persistence = create_config_persistence(&config).await?;
    let handlers = build_handlers(persistence);

    match cli.command {
        Commands::Seed { file } => {
            let definitions = DestinationDefinitions::from_file(&file)?;
            seed_definitions(&handlers.config_repository, &definitions).await
        }
        Commands::Destinations(command) => handle_destinations(&handlers, command).await,
        Commands::Implementations(command) => handle_implementations(&handlers, command).await,
        Commands::Connections(command) => handle_connections(&handlers, command).await,
    }
}

async fn handle_destinations(handlers: &ServerHandlers, command: DestinationCommands) -> Result<()> {
    match command {
        DestinationCommands::List => print_json(&handlers.destinations.list_destinations().await?),
        DestinationCommands::Specification { destination_id } => {
            let specification = handlers
                .destination_specifications
                .get_destination_specification(&DestinationIdRequestBody { destination_id })
                .await?;
            print_json(&specification)
        }
    }
}

async fn handle_implementations(
    handlers: &ServerHandlers,
    command: ImplementationCommands,
) -> Result<()> {
    let implementations = &handlers.destination_implementations;
    match command {
        ImplementationCommands::Create {
            workspace_id,
            specification_id,
            name,
            configuration,
        } => {
            let create = DestinationImplementationCreate {
                workspace_id,
                destination_specification_id: specification_id,
                name,
                connection_configuration: parse_configuration(&configuration)?,
            };
            print_json(&implementations.create_destination_implementation(&create).await?)
        }
        ImplementationCommands::Get { id } => {
            let read = implementations
                .get_destination_implementation(&DestinationImplementationIdRequestBody::new(id))
                .await?;
            print_json(&read)
        }
        ImplementationCommands::Update {
            id,
            name,
            configuration,
        } => {
            let update = DestinationImplementationUpdate {
                destination_implementation_id: id,
                name,
                connection_configuration: parse_configuration(&configuration)?,
            };
            print_json(&implementations.update_destination_implementation(&update).await?)
        }
        ImplementationCommands::Delete { id } => {
            implementations
                .delete_destination_implementation(&DestinationImplementationIdRequestBody::new(id))
                .await?;
            println!("Deleted destination implementation {}", id);
            Ok(())
        }
        ImplementationCommands::List { workspace_id } => {
            let list = implementations
                .list_destination_implementations_for_workspace(&WorkspaceIdRequestBody::new(
                    workspace_id,
                ))
                .await?;
            print_json(&list)
        }
    }
}

async fn handle_connections(handlers: &ServerHandlers, command: ConnectionCommands) -> Result<()> {
    let connections = &handlers.connections;
    match command {
        ConnectionCommands::Create {
            source_implementation_id,
            destination_implementation_id,
            name,
            sync_mode,
            every,
            time_unit,
        } => {
            let create = ConnectionCreate {
                source_implementation_id,
                destination_implementation_id,
                name,
                sync_mode: sync_mode.into(),
                sync_schema: SourceSchema::default(),
                schedule: schedule_from_args(every, time_unit),
                status: ConnectionStatus::Active,
            };
            print_json(&connections.create_connection(&create).await?)
        }
        ConnectionCommands::Get { id } => {
            let read = connections
                .get_connection(&ConnectionIdRequestBody { connection_id: id })
                .await?;
            print_json(&read)
        }
        ConnectionCommands::List { workspace_id } => {
            let list = connections
                .list_connections_for_workspace(&WorkspaceIdRequestBody::new(workspace_id))
                .await?;
            print_json(&list)
        }
    }
}

fn parse_configuration(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("--configuration must be a JSON document")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
