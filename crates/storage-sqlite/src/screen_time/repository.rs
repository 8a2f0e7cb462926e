use chrono::{NaiveDate, Utc};
use goalstreak_core::errors::{Error, Result, ValidationError};
use goalstreak_core::screen_time::{NewScreenTimeEntry, ScreenTimeEntry, ScreenTimeRepositoryTrait};

use super::model::{NewScreenTimeEntryDB, ScreenTimeEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::screen_time_entries;
use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct ScreenTimeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ScreenTimeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ScreenTimeRepository { pool, writer }
    }
}

#[async_trait]
impl ScreenTimeRepositoryTrait for ScreenTimeRepository {
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<ScreenTimeEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = screen_time_entries::table
            .filter(screen_time_entries::goal_id.eq(goal_id))
            .order((
                screen_time_entries::day.desc(),
                screen_time_entries::created_at.desc(),
            ))
            .load::<ScreenTimeEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ScreenTimeEntry::from).collect())
    }

    fn total_minutes_for_day(&self, goal_id: &str, day: NaiveDate) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<i64> = screen_time_entries::table
            .filter(
                screen_time_entries::goal_id
                    .eq(goal_id)
                    .and(screen_time_entries::day.eq(day)),
            )
            .select(sum(screen_time_entries::time_spent_minutes))
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0))
    }

    async fn insert(&self, new_entry: NewScreenTimeEntry) -> Result<ScreenTimeEntry> {
        let goal_id = new_entry.goal_id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        self.writer
            .exec(move |conn| {
                let entry_db = NewScreenTimeEntryDB {
                    id: new_entry.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    goal_id,
                    app_name: new_entry.app_name,
                    time_spent_minutes: new_entry.time_spent_minutes,
                    day: new_entry.day,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(screen_time_entries::table)
                    .values(&entry_db)
                    .returning(ScreenTimeEntryDB::as_returning())
                    .get_result::<ScreenTimeEntryDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(ScreenTimeEntry::from(inserted))
            })
            .await
    }
}
