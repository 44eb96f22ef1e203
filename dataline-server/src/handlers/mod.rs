//! Handler implementations: destination implementations, connections, destinations and their specifications.

mod connections_handler;
mod destination_implementations_handler;
mod destination_specifications_handler;
mod destinations_handler;

use std::sync::Arc;

use uuid::Uuid;

pub use connections_handler::{ConfigConnectionsHandler, ConnectionsHandler};
pub use destination_implementations_handler::DestinationImplementationsHandler;
pub use destination_specifications_handler::DestinationSpecificationsHandler;
pub use destinations_handler::DestinationsHandler;

/// Source of ids for newly created records.
pub type UuidGenerator = Arc<dyn Fn() -> Uuid + Send + Sync>;

/// Generator producing random v4 ids.
pub fn random_uuid_generator() -> UuidGenerator {
    Arc::new(Uuid::new_v4)
}
