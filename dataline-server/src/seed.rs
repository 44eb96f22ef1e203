//! Loads standard destinations and their specifications into the config store.

use std::path::Path;

use anyhow::{Context, Result};
use config_persistence::{
    ConfigRepository, DestinationConnectionSpecification, StandardDestination,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Contents of a seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDefinitions {
    #[serde(default)]
    pub destinations: Vec<StandardDestination>,
    #[serde(default)]
    pub destination_specifications: Vec<DestinationConnectionSpecification>,
}

impl DestinationDefinitions {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Read seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Parse seed file {}", path.display()))
    }
}

/// Writes every definition; existing records with the same id are replaced.
pub async fn seed_definitions(
    config_repository: &ConfigRepository,
    definitions: &DestinationDefinitions,
) -> Result<()> {
    for destination in &definitions.destinations {
        config_repository
            .write_standard_destination(destination)
            .await?;
    }
    for specification in &definitions.destination_specifications {
        config_repository
            .write_destination_connection_specification(specification)
            .await?;
    }

    info!(
        destinations = definitions.destinations.len(),
        specifications = definitions.destination_specifications.len(),
        "Seeded destination definitions"
    );
    Ok(())
}
