use chrono::NaiveDate;

use crate::errors::Result;
use crate::streaks::streaks_model::Streak;
use async_trait::async_trait;

/// Trait for streak repository operations.
///
/// Streak rows are inserted by the goal repository (goal + zeroed streak in
/// one transaction) and updated by the completion repository (completion +
/// recomputed streak in one transaction), so the streak repository itself is
/// read-only.
pub trait StreakRepositoryTrait: Send + Sync {
    fn get_by_goal_id(&self, goal_id: &str) -> Result<Streak>;
}

/// Trait for streak service operations
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    fn get_streak(&self, goal_id: &str) -> Result<Streak>;
    /// Records a completion for `day` and recomputes the streak. The
    /// recompute runs exactly once per accepted call and never on rejected
    /// ones.
    async fn record_completion(&self, goal_id: &str, day: NaiveDate) -> Result<Streak>;
}
