//! Database models for focus sessions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;

/// Database model for focus sessions
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
#[diesel(table_name = crate::schema::focus_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FocusSessionDB {
    pub id: String,
    pub goal_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
    pub planned_duration_minutes: i32,
    pub actual_duration_minutes: Option<i32>,
    pub distraction_events: i32,
    pub completion_rate: i32,
}

/// Database model for starting a focus session
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::focus_sessions)]
pub struct NewFocusSessionDB {
    pub id: String,
    pub goal_id: String,
    pub started_at: NaiveDateTime,
    pub planned_duration_minutes: i32,
    pub distraction_events: i32,
    pub completion_rate: i32,
}

/// Partial changeset for closing or rescoring a session. `None` fields are
/// left untouched.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::focus_sessions)]
pub struct FocusSessionUpdateDB {
    pub ended_at: Option<NaiveDateTime>,
    pub actual_duration_minutes: Option<i32>,
    pub distraction_events: Option<i32>,
    pub completion_rate: Option<i32>,
}

impl FocusSessionUpdateDB {
    /// Diesel rejects an empty changeset, so callers check first.
    pub fn has_changes(&self) -> bool {
        self.ended_at.is_some()
            || self.actual_duration_minutes.is_some()
            || self.distraction_events.is_some()
            || self.completion_rate.is_some()
    }
}

impl From<FocusSessionDB> for goalstreak_core::focus::FocusSession {
    fn from(db: FocusSessionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            started_at: db.started_at,
            ended_at: db.ended_at,
            planned_duration_minutes: db.planned_duration_minutes,
            actual_duration_minutes: db.actual_duration_minutes,
            distraction_events: db.distraction_events,
            completion_rate: db.completion_rate,
        }
    }
}

impl From<goalstreak_core::focus::FocusSessionUpdate> for FocusSessionUpdateDB {
    fn from(domain: goalstreak_core::focus::FocusSessionUpdate) -> Self {
        Self {
            ended_at: domain.ended_at,
            actual_duration_minutes: domain.actual_duration_minutes,
            distraction_events: domain.distraction_events,
            completion_rate: domain.completion_rate,
        }
    }
}
