//! Goal domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a goal the user is working toward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    /// Target date for the goal, stored as UTC. Validated against the clock
    /// once at creation and never re-validated afterwards.
    pub deadline: NaiveDateTime,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub deadline: NaiveDateTime,
    pub reason: Option<String>,
}

impl NewGoal {
    /// Validates the new goal data against the clock supplied by the caller.
    pub fn validate(&self, now: NaiveDateTime) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )));
        }
        if self.deadline <= now {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal deadline must be in the future".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing goal.
///
/// Only name, deadline and reason are mutable; `id` and `created_at` never
/// change after creation. Fields left as `None` are not touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub reason: Option<String>,
}

impl GoalUpdate {
    /// Validates the goal update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal ID is required for updates".to_string(),
            )));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Goal name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}
