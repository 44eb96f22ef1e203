//! # Dataline configuration server
//!
//! Handlers over the config repository: destination implementations (validated against their
//! destination's JSON-schema specification), connections, destinations and specifications.
//! Loads config from env and wires persistence, validation and handlers.

pub mod cli;
pub mod components;
pub mod config;
pub mod converters;
pub mod core;
pub mod handlers;
pub mod seed;
pub mod validation;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_handlers, build_handlers_with, create_config_persistence, ServerHandlers};
pub use config::{ConfigStoreType, ServerConfig};
pub use core::{init_tracing, Result, ServerError};
pub use handlers::{
    random_uuid_generator, ConfigConnectionsHandler, ConnectionsHandler,
    DestinationImplementationsHandler, DestinationSpecificationsHandler, DestinationsHandler,
    UuidGenerator,
};
pub use seed::{seed_definitions, DestinationDefinitions};
pub use validation::{ConfigValidator, IntegrationSchemaValidation, JsonValidationError};
