//! JSON-schema validation of integration configurations.
//!
//! The specification's `specification` field is compiled as a draft-7 schema on every call.
//! Every violation is reported, not just the first.

use config_persistence::DestinationConnectionSpecification;
use jsonschema::{Draft, Validator};
use serde_json::Value;
use tracing::debug;

use super::{ConfigValidator, JsonValidationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrationSchemaValidation;

impl IntegrationSchemaValidation {
    pub fn new() -> Self {
        Self
    }

    fn compile(schema: &Value) -> Result<Validator, JsonValidationError> {
        jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(schema)
            .map_err(|err| JsonValidationError::InvalidSchema(err.to_string()))
    }
}

impl ConfigValidator for IntegrationSchemaValidation {
    fn validate_config(
        &self,
        specification: &DestinationConnectionSpecification,
        configuration: &Value,
    ) -> Result<(), JsonValidationError> {
        let validator = Self::compile(&specification.specification)?;

        let errors: Vec<String> = validator
            .iter_errors(configuration)
            .map(|err| err.to_string())
            .collect();

        if errors.is_empty() {
            return Ok(());
        }

        debug!(
            destination_specification_id = %specification.destination_specification_id,
            error_count = errors.len(),
            "Configuration failed schema validation"
        );
        Err(JsonValidationError::InvalidConfiguration(errors))
    }
}
