//! Core: error types and tracing setup.

pub mod error;
pub mod logger;

pub use error::{Result, ServerError};
pub use logger::init_tracing;
