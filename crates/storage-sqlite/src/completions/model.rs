//! Database models for daily completions.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for daily completions. The `(goal_id, day)` unique index
/// backs the one-completion-per-day invariant.
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
#[diesel(table_name = crate::schema::daily_completions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CompletionDB {
    pub id: String,
    pub goal_id: String,
    pub day: NaiveDate,
    pub completed: bool,
}

// Conversion to/from domain models
impl From<CompletionDB> for goalstreak_core::completions::DailyCompletion {
    fn from(db: CompletionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            day: db.day,
            completed: db.completed,
        }
    }
}

impl From<goalstreak_core::completions::DailyCompletion> for CompletionDB {
    fn from(domain: goalstreak_core::completions::DailyCompletion) -> Self {
        Self {
            id: domain.id,
            goal_id: domain.goal_id,
            day: domain.day,
            completed: domain.completed,
        }
    }
}
