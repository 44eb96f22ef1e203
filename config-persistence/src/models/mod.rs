//! Config record models persisted by the repository.

mod destination_connection_implementation;
mod destination_connection_specification;
mod standard_destination;
mod standard_sync;
mod standard_sync_schedule;

pub use destination_connection_implementation::DestinationConnectionImplementation;
pub use destination_connection_specification::DestinationConnectionSpecification;
pub use standard_destination::StandardDestination;
pub use standard_sync::{Column, DataType, Schema, StandardSync, SyncMode, SyncStatus, Table};
pub use standard_sync_schedule::{Schedule, StandardSyncSchedule, TimeUnit};
