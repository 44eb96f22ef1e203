//! Validation of implementation configurations against their destination specification.

mod integration_schema_validation;

pub use integration_schema_validation::IntegrationSchemaValidation;

use config_persistence::DestinationConnectionSpecification;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonValidationError {
    #[error("invalid specification schema: {0}")]
    InvalidSchema(String),

    #[error("configuration does not match specification: {}", .0.join("; "))]
    InvalidConfiguration(Vec<String>),
}

/// Checks a configuration blob against the schema carried by a specification.
pub trait ConfigValidator: Send + Sync {
    fn validate_config(
        &self,
        specification: &DestinationConnectionSpecification,
        configuration: &Value,
    ) -> Result<(), JsonValidationError>;
}
