//! Daily completion domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single per-day completion fact for a goal.
///
/// At most one record with `completed = true` exists per `(goal_id, day)`;
/// the storage layer backs this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletion {
    pub id: String,
    pub goal_id: String,
    /// UTC calendar day. Time-of-day never reaches this model.
    pub day: NaiveDate,
    pub completed: bool,
}

impl DailyCompletion {
    /// A fresh completed record for the given day.
    pub fn for_day(goal_id: &str, day: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            day,
            completed: true,
        }
    }
}
