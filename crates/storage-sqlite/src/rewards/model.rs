//! Database models for rewards.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for rewards
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::rewards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RewardDB {
    pub id: String,
    pub goal_id: String,
    pub reward_type: String,
    pub points_earned: i32,
    pub badge_name: Option<String>,
    pub unlocked_at: NaiveDateTime,
    pub claimed: bool,
}

/// Database model for creating a reward
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::rewards)]
pub struct NewRewardDB {
    pub id: String,
    pub goal_id: String,
    pub reward_type: String,
    pub points_earned: i32,
    pub badge_name: Option<String>,
    pub unlocked_at: NaiveDateTime,
    pub claimed: bool,
}

impl From<RewardDB> for goalstreak_core::rewards::Reward {
    fn from(db: RewardDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            reward_type: db.reward_type,
            points_earned: db.points_earned,
            badge_name: db.badge_name,
            unlocked_at: db.unlocked_at,
            claimed: db.claimed,
        }
    }
}
