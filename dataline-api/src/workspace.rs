use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scopes a list call to one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceIdRequestBody {
    pub workspace_id: Uuid,
}

impl WorkspaceIdRequestBody {
    pub fn new(workspace_id: Uuid) -> Self {
        Self { workspace_id }
    }
}
