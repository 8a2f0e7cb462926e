use std::sync::Arc;

use super::rewards_model::{NewReward, Reward};
use super::rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;

/// Service for granting and claiming rewards.
pub struct RewardService {
    repository: Arc<dyn RewardRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl RewardService {
    pub fn new(
        repository: Arc<dyn RewardRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        RewardService {
            repository,
            goal_repository,
        }
    }
}

#[async_trait]
impl RewardServiceTrait for RewardService {
    fn get_rewards(&self, goal_id: &str) -> Result<Vec<Reward>> {
        self.repository.list_for_goal(goal_id)
    }

    async fn grant(&self, new_reward: NewReward) -> Result<Reward> {
        new_reward.validate()?;
        let goal_id = new_reward.goal_id.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        let _goal = self.goal_repository.get_by_id(goal_id)?;
        self.repository.insert(new_reward).await
    }

    async fn claim(&self, reward_id: &str) -> Result<Reward> {
        self.repository.claim(reward_id).await
    }
}
