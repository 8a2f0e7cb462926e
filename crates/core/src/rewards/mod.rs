//! Rewards module - badges and points unlocked along the way.

mod rewards_model;
mod rewards_service;
mod rewards_traits;

pub use rewards_model::{NewReward, Reward};
pub use rewards_service::RewardService;
pub use rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
