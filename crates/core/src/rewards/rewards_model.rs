//! Reward domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A reward unlocked for a goal (streak milestone, surprise, focus bonus...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub goal_id: String,
    pub reward_type: String,
    pub points_earned: i32,
    pub badge_name: Option<String>,
    pub unlocked_at: NaiveDateTime,
    pub claimed: bool,
}

/// Input model for unlocking a new reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReward {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    pub reward_type: String,
    #[serde(default)]
    pub points_earned: i32,
    pub badge_name: Option<String>,
}

impl NewReward {
    pub fn validate(&self) -> Result<()> {
        if self.reward_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Reward type cannot be empty".to_string(),
            )));
        }
        if self.points_earned < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Points cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
