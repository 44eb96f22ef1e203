//! # dataline-api
//!
//! Request and response models exchanged with the configuration server: destination implementations,
//! connections, destinations and their specifications. Transport-agnostic; used by dataline-server.

pub mod connection;
pub mod destination;
pub mod destination_implementation;
pub mod workspace;

pub use connection::{
    ConnectionCreate, ConnectionIdRequestBody, ConnectionRead, ConnectionReadList,
    ConnectionSchedule, ConnectionStatus, ConnectionUpdate, DataType, SourceSchema,
    SourceSchemaColumn, SourceSchemaTable, SyncMode, TimeUnit,
};
pub use destination::{
    DestinationIdRequestBody, DestinationRead, DestinationReadList, DestinationSpecificationRead,
};
pub use destination_implementation::{
    DestinationImplementationCreate, DestinationImplementationIdRequestBody,
    DestinationImplementationRead, DestinationImplementationReadList,
    DestinationImplementationUpdate,
};
pub use workspace::WorkspaceIdRequestBody;
