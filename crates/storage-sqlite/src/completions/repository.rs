use chrono::NaiveDate;
use goalstreak_core::completions::{CompletionRepositoryTrait, DailyCompletion};
use goalstreak_core::errors::{Error, Result};
use goalstreak_core::streaks::Streak;

use super::model::CompletionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{daily_completions, streaks};
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct CompletionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CompletionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CompletionRepository { pool, writer }
    }
}

#[async_trait]
impl CompletionRepositoryTrait for CompletionRepository {
    fn find_by_goal_and_day(
        &self,
        goal_id: &str,
        day: NaiveDate,
    ) -> Result<Option<DailyCompletion>> {
        let mut conn = get_connection(&self.pool)?;
        let row = daily_completions::table
            .filter(
                daily_completions::goal_id
                    .eq(goal_id)
                    .and(daily_completions::day.eq(day)),
            )
            .first::<CompletionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(DailyCompletion::from))
    }

    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<DailyCompletion>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = daily_completions::table
            .filter(daily_completions::goal_id.eq(goal_id))
            .order(daily_completions::day.asc())
            .load::<CompletionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(DailyCompletion::from).collect())
    }

    async fn insert_with_streak(
        &self,
        completion: DailyCompletion,
        streak: Streak,
    ) -> Result<(DailyCompletion, Streak)> {
        self.writer
            .exec(move |conn| {
                let completion_db = CompletionDB::from(completion);
                let inserted = diesel::insert_into(daily_completions::table)
                    .values(&completion_db)
                    .returning(CompletionDB::as_returning())
                    .get_result::<CompletionDB>(conn)
                    .map_err(StorageError::from)?;

                let affected = diesel::update(streaks::table.find(streak.id.as_str()))
                    .set((
                        streaks::current_streak.eq(streak.current_streak),
                        streaks::best_streak.eq(streak.best_streak),
                        streaks::total_completed.eq(streak.total_completed),
                        streaks::last_completed_date.eq(streak.last_completed_date),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Streak for goal {} not found",
                        streak.goal_id
                    )));
                }

                Ok((DailyCompletion::from(inserted), streak))
            })
            .await
    }
}
