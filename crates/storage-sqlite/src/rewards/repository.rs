use chrono::Utc;
use goalstreak_core::errors::{Error, Result, ValidationError};
use goalstreak_core::rewards::{NewReward, Reward, RewardRepositoryTrait};

use super::model::{NewRewardDB, RewardDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::rewards;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct RewardRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RewardRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RewardRepository { pool, writer }
    }
}

#[async_trait]
impl RewardRepositoryTrait for RewardRepository {
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<Reward>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rewards::table
            .filter(rewards::goal_id.eq(goal_id))
            .order(rewards::unlocked_at.desc())
            .load::<RewardDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Reward::from).collect())
    }

    async fn insert(&self, new_reward: NewReward) -> Result<Reward> {
        let goal_id = new_reward.goal_id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        self.writer
            .exec(move |conn| {
                let reward_db = NewRewardDB {
                    id: new_reward.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    goal_id,
                    reward_type: new_reward.reward_type,
                    points_earned: new_reward.points_earned,
                    badge_name: new_reward.badge_name,
                    unlocked_at: Utc::now().naive_utc(),
                    claimed: false,
                };
                let inserted = diesel::insert_into(rewards::table)
                    .values(&reward_db)
                    .returning(RewardDB::as_returning())
                    .get_result::<RewardDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Reward::from(inserted))
            })
            .await
    }

    async fn claim(&self, reward_id: &str) -> Result<Reward> {
        let reward_id = reward_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(rewards::table.find(reward_id.as_str()))
                    .set(rewards::claimed.eq(true))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(Error::NotFound(format!("Reward {} not found", reward_id)));
                }
                let row = rewards::table
                    .find(reward_id.as_str())
                    .first::<RewardDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Reward::from(row))
            })
            .await
    }
}
