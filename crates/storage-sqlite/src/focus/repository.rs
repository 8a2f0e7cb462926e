use chrono::Utc;
use goalstreak_core::errors::{Error, Result, ValidationError};
use goalstreak_core::focus::{
    FocusRepositoryTrait, FocusSession, FocusSessionUpdate, NewFocusSession,
};

use super::model::{FocusSessionDB, FocusSessionUpdateDB, NewFocusSessionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::focus_sessions;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct FocusRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FocusRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FocusRepository { pool, writer }
    }
}

#[async_trait]
impl FocusRepositoryTrait for FocusRepository {
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<FocusSession>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = focus_sessions::table
            .filter(focus_sessions::goal_id.eq(goal_id))
            .order(focus_sessions::started_at.desc())
            .load::<FocusSessionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FocusSession::from).collect())
    }

    async fn insert(&self, new_session: NewFocusSession) -> Result<FocusSession> {
        let goal_id = new_session.goal_id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        self.writer
            .exec(move |conn| {
                let session_db = NewFocusSessionDB {
                    id: new_session.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    goal_id,
                    started_at: new_session
                        .started_at
                        .unwrap_or_else(|| Utc::now().naive_utc()),
                    planned_duration_minutes: new_session.planned_duration_minutes,
                    distraction_events: 0,
                    completion_rate: 0,
                };
                let inserted = diesel::insert_into(focus_sessions::table)
                    .values(&session_db)
                    .returning(FocusSessionDB::as_returning())
                    .get_result::<FocusSessionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(FocusSession::from(inserted))
            })
            .await
    }

    async fn update(&self, session_update: FocusSessionUpdate) -> Result<FocusSession> {
        let session_id = session_update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        self.writer
            .exec(move |conn| {
                let changes = FocusSessionUpdateDB::from(session_update);
                if changes.has_changes() {
                    let affected = diesel::update(focus_sessions::table.find(session_id.as_str()))
                        .set(&changes)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Err(Error::NotFound(format!(
                            "Focus session {} not found",
                            session_id
                        )));
                    }
                }
                let row = focus_sessions::table
                    .find(session_id.as_str())
                    .first::<FocusSessionDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                row.map(FocusSession::from).ok_or_else(|| {
                    Error::NotFound(format!("Focus session {} not found", session_id))
                })
            })
            .await
    }
}
