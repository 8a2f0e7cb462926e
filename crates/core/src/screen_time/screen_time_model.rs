//! Screen time domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A logged slice of time spent in a distracting app, counted against a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTimeEntry {
    pub id: String,
    pub goal_id: String,
    pub app_name: String,
    pub time_spent_minutes: i32,
    pub day: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for logging screen time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScreenTimeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    pub app_name: String,
    pub time_spent_minutes: i32,
    pub day: NaiveDate,
}

impl NewScreenTimeEntry {
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "App name cannot be empty".to_string(),
            )));
        }
        if self.time_spent_minutes < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Time spent cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
