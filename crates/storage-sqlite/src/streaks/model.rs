//! Database models for streaks.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for streaks. Inserted alongside its goal and rewritten by
/// the completion repository's recompute transaction.
#[derive(
    Insertable,
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
#[diesel(table_name = crate::schema::streaks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StreakDB {
    pub id: String,
    pub goal_id: String,
    pub current_streak: i32,
    pub best_streak: i32,
    pub total_completed: i32,
    pub last_completed_date: Option<NaiveDate>,
}

// Conversion to/from domain models
impl From<StreakDB> for goalstreak_core::streaks::Streak {
    fn from(db: StreakDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            current_streak: db.current_streak,
            best_streak: db.best_streak,
            total_completed: db.total_completed,
            last_completed_date: db.last_completed_date,
        }
    }
}

impl From<goalstreak_core::streaks::Streak> for StreakDB {
    fn from(domain: goalstreak_core::streaks::Streak) -> Self {
        Self {
            id: domain.id,
            goal_id: domain.goal_id,
            current_streak: domain.current_streak,
            best_streak: domain.best_streak,
            total_completed: domain.total_completed,
            last_completed_date: domain.last_completed_date,
        }
    }
}
