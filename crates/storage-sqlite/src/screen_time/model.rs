//! Database models for screen time entries.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for screen time entries
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
#[diesel(table_name = crate::schema::screen_time_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ScreenTimeEntryDB {
    pub id: String,
    pub goal_id: String,
    pub app_name: String,
    pub time_spent_minutes: i32,
    pub day: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a screen time entry
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::screen_time_entries)]
pub struct NewScreenTimeEntryDB {
    pub id: String,
    pub goal_id: String,
    pub app_name: String,
    pub time_spent_minutes: i32,
    pub day: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<ScreenTimeEntryDB> for goalstreak_core::screen_time::ScreenTimeEntry {
    fn from(db: ScreenTimeEntryDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            app_name: db.app_name,
            time_spent_minutes: db.time_spent_minutes,
            day: db.day,
            created_at: db.created_at,
        }
    }
}
