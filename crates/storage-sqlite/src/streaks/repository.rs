use goalstreak_core::errors::{Error, Result};
use goalstreak_core::streaks::{Streak, StreakRepositoryTrait};

use super::model::StreakDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::streaks;
use diesel::prelude::*;

use std::sync::Arc;

/// Read side of streak storage. Inserts happen in the goal repository's
/// creation transaction, updates in the completion repository's recompute
/// transaction.
pub struct StreakRepository {
    pool: Arc<DbPool>,
}

impl StreakRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        StreakRepository { pool }
    }
}

impl StreakRepositoryTrait for StreakRepository {
    fn get_by_goal_id(&self, goal_id: &str) -> Result<Streak> {
        let mut conn = get_connection(&self.pool)?;
        let row = streaks::table
            .filter(streaks::goal_id.eq(goal_id))
            .first::<StreakDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(Streak::from)
            .ok_or_else(|| Error::NotFound(format!("Streak for goal {} not found", goal_id)))
    }
}
