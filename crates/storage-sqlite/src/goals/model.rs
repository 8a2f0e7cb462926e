//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for goals
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub name: String,
    pub deadline: NaiveDateTime,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub name: String,
    pub deadline: NaiveDateTime,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Partial changeset for goal updates. `None` fields are left untouched.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct GoalUpdateDB {
    pub name: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub reason: Option<String>,
}

impl GoalUpdateDB {
    /// Diesel rejects an empty changeset, so callers check first.
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.deadline.is_some() || self.reason.is_some()
    }
}

// Conversion to/from domain models
impl From<GoalDB> for goalstreak_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            deadline: db.deadline,
            reason: db.reason,
            created_at: db.created_at,
        }
    }
}

impl From<goalstreak_core::goals::GoalUpdate> for GoalUpdateDB {
    fn from(domain: goalstreak_core::goals::GoalUpdate) -> Self {
        Self {
            name: domain.name,
            deadline: domain.deadline,
            reason: domain.reason,
        }
    }
}
