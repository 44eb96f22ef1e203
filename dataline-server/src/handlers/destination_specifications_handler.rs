//! Looks up the configuration specification of a destination.

use config_persistence::{ConfigError, ConfigRepository, ConfigSchema};
use dataline_api::{DestinationIdRequestBody, DestinationSpecificationRead};
use tracing::instrument;

use crate::core::Result;

pub struct DestinationSpecificationsHandler {
    config_repository: ConfigRepository,
}

impl DestinationSpecificationsHandler {
    pub fn new(config_repository: ConfigRepository) -> Self {
        Self { config_repository }
    }

    /// Returns the first specification registered for the destination.
    #[instrument(skip(self))]
    pub async fn get_destination_specification(
        &self,
        request: &DestinationIdRequestBody,
    ) -> Result<DestinationSpecificationRead> {
        let specification = self
            .config_repository
            .list_destination_connection_specifications()
            .await?
            .into_iter()
            .find(|s| s.destination_id == request.destination_id)
            .ok_or_else(|| {
                ConfigError::not_found(
                    ConfigSchema::DestinationConnectionSpecification,
                    request.destination_id.to_string(),
                )
            })?;

        Ok(DestinationSpecificationRead {
            destination_id: specification.destination_id,
            destination_specification_id: specification.destination_specification_id,
            documentation_url: specification.documentation_url,
            connection_specification: specification.specification,
        })
    }
}
