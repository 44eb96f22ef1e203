use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub units: u64,
    pub time_unit: TimeUnit,
}

/// When a connection runs. `manual` is true exactly when there is no schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSyncSchedule {
    pub connection_id: Uuid,
    pub schedule: Option<Schedule>,
    pub manual: bool,
}

impl StandardSyncSchedule {
    pub fn new(connection_id: Uuid, schedule: Option<Schedule>) -> Self {
        Self {
            connection_id,
            manual: schedule.is_none(),
            schedule,
        }
    }
}
