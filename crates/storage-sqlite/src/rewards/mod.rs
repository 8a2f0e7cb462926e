//! SQLite storage implementation for rewards.

mod model;
mod repository;

pub use model::{NewRewardDB, RewardDB};
pub use repository::RewardRepository;
