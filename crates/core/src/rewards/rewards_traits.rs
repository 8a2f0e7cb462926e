use crate::errors::Result;
use crate::rewards::rewards_model::{NewReward, Reward};
use async_trait::async_trait;

/// Trait for reward repository operations
#[async_trait]
pub trait RewardRepositoryTrait: Send + Sync {
    /// Rewards for a goal, most recently unlocked first.
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<Reward>>;
    async fn insert(&self, new_reward: NewReward) -> Result<Reward>;
    /// Marks the reward claimed. Claiming twice is a no-op returning the row.
    async fn claim(&self, reward_id: &str) -> Result<Reward>;
}

/// Trait for reward service operations
#[async_trait]
pub trait RewardServiceTrait: Send + Sync {
    fn get_rewards(&self, goal_id: &str) -> Result<Vec<Reward>>;
    async fn grant(&self, new_reward: NewReward) -> Result<Reward>;
    async fn claim(&self, reward_id: &str) -> Result<Reward>;
}
