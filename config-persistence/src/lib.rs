//! Config persistence crate: config records, storage backends and the typed repository.
//!
//! ## Modules
//!
//! - [`error`] – Config error types
//! - [`models`] – StandardDestination, DestinationConnectionSpecification, DestinationConnectionImplementation, StandardSync, StandardSyncSchedule
//! - [`persistence`] – ConfigPersistence trait and ConfigSchema
//! - [`inmemory_persistence`] – InMemoryConfigPersistence
//! - [`sqlite_persistence`] – SqliteConfigPersistence (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`config_repository`] – ConfigRepository (typed access)

mod config_repository;
mod error;
mod inmemory_persistence;
mod models;
mod persistence;
mod sqlite_persistence;
mod sqlite_pool;


pub use config_repository::ConfigRepository;
pub use error::ConfigError;
pub use inmemory_persistence::InMemoryConfigPersistence;
pub use models::{
    Column, DataType, DestinationConnectionImplementation, DestinationConnectionSpecification,
    Schedule, Schema, StandardDestination, StandardSync, StandardSyncSchedule, SyncMode,
    SyncStatus, Table, TimeUnit,
};
pub use persistence::{ConfigPersistence, ConfigSchema};
pub use sqlite_persistence::SqliteConfigPersistence;
pub use sqlite_pool::SqlitePoolManager;
