use goalstreak_core::errors::{Error, Result, ValidationError};
use goalstreak_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use goalstreak_core::streaks::Streak;

use super::model::{GoalDB, GoalUpdateDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{goals, streaks};
use crate::streaks::StreakDB;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let row = goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(Goal::from)
            .ok_or_else(|| Error::NotFound(format!("Goal {} not found", goal_id)))
    }

    fn list(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .order(goals::created_at.desc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Goal::from).collect())
    }

    async fn create_with_streak(&self, new_goal: NewGoal, initial_streak: Streak) -> Result<Goal> {
        self.writer
            .exec(move |conn| {
                let goal_db = NewGoalDB {
                    id: new_goal
                        .id
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    name: new_goal.name,
                    deadline: new_goal.deadline,
                    reason: new_goal.reason,
                    created_at: Utc::now().naive_utc(),
                };
                let created = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result::<GoalDB>(conn)
                    .map_err(StorageError::from)?;

                let streak_db = StreakDB::from(initial_streak);
                diesel::insert_into(streaks::table)
                    .values(&streak_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(Goal::from(created))
            })
            .await
    }

    async fn update(&self, goal_update: GoalUpdate) -> Result<Goal> {
        let goal_id = goal_update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        self.writer
            .exec(move |conn| {
                let changes = GoalUpdateDB::from(goal_update);
                if changes.has_changes() {
                    let affected = diesel::update(goals::table.find(goal_id.as_str()))
                        .set(&changes)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Err(Error::NotFound(format!("Goal {} not found", goal_id)));
                    }
                }
                let row = goals::table
                    .find(goal_id.as_str())
                    .first::<GoalDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                row.map(Goal::from)
                    .ok_or_else(|| Error::NotFound(format!("Goal {} not found", goal_id)))
            })
            .await
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        // ON DELETE CASCADE removes the streak, completion history and
        // tracking records in the same statement.
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(goals::table.find(goal_id.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
