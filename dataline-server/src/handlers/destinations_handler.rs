//! Read access to the standard destinations known to the server.

use config_persistence::{ConfigRepository, StandardDestination};
use dataline_api::{DestinationIdRequestBody, DestinationRead, DestinationReadList};
use tracing::instrument;

use crate::core::Result;

pub struct DestinationsHandler {
    config_repository: ConfigRepository,
}

impl DestinationsHandler {
    pub fn new(config_repository: ConfigRepository) -> Self {
        Self { config_repository }
    }

    #[instrument(skip(self))]
    pub async fn list_destinations(&self) -> Result<DestinationReadList> {
        let destinations = self
            .config_repository
            .list_standard_destinations()
            .await?
            .into_iter()
            .map(to_destination_read)
            .collect();
        Ok(DestinationReadList { destinations })
    }

    #[instrument(skip(self))]
    pub async fn get_destination(&self, request: &DestinationIdRequestBody) -> Result<DestinationRead> {
        let destination = self
            .config_repository
            .get_standard_destination(request.destination_id)
            .await?;
        Ok(to_destination_read(destination))
    }
}

fn to_destination_read(destination: StandardDestination) -> DestinationRead {
    DestinationRead {
        destination_id: destination.destination_id,
        name: destination.name,
    }
}
