//! Focus session domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A timed deep-work session against a goal. Created open and closed with a
/// partial update once it ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    pub goal_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
    pub planned_duration_minutes: i32,
    pub actual_duration_minutes: Option<i32>,
    pub distraction_events: i32,
    /// 0-100.
    pub completion_rate: i32,
}

/// Input model for starting a focus session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFocusSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<NaiveDateTime>,
    pub planned_duration_minutes: i32,
}

impl NewFocusSession {
    pub fn validate(&self) -> Result<()> {
        if self.planned_duration_minutes <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Planned duration must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for closing or rescoring a focus session. Fields left as
/// `None` are not touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSessionUpdate {
    pub id: Option<String>,
    pub ended_at: Option<NaiveDateTime>,
    pub actual_duration_minutes: Option<i32>,
    pub distraction_events: Option<i32>,
    pub completion_rate: Option<i32>,
}

impl FocusSessionUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Session ID is required for updates".to_string(),
            )));
        }
        if let Some(rate) = self.completion_rate {
            if !(0..=100).contains(&rate) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Completion rate must be between 0 and 100".to_string(),
                )));
            }
        }
        if let Some(minutes) = self.actual_duration_minutes {
            if minutes < 0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Actual duration cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
