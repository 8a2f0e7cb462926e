use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::streaks::Streak;
use async_trait::async_trait;

/// Service for managing goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_by_id(goal_id)
    }

    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.repository.list()
    }

    /// Creates a goal together with its zeroed streak record.
    ///
    /// The two inserts are handed to the repository as one transaction so a
    /// goal can never exist without a streak.
    async fn create_goal(&self, mut new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate(Utc::now().naive_utc())?;
        let goal_id = new_goal
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        debug!("Creating goal {}", goal_id);
        let initial_streak = Streak::zeroed(&goal_id);
        self.repository
            .create_with_streak(new_goal, initial_streak)
            .await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.repository.update(goal_update).await
    }

    /// Deletes a goal. "Nothing deleted" is a normal `false` return, not an
    /// error.
    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let deleted = self.repository.delete(goal_id).await?;
        Ok(deleted > 0)
    }
}
