//! A destination connector type known to the server (e.g. Postgres, BigQuery).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardDestination {
    pub destination_id: Uuid,
    pub name: String,
}
