use chrono::NaiveDate;

use crate::completions::completions_model::DailyCompletion;
use crate::errors::Result;
use crate::streaks::Streak;
use async_trait::async_trait;

/// Trait for completion ledger repository operations
#[async_trait]
pub trait CompletionRepositoryTrait: Send + Sync {
    fn find_by_goal_and_day(&self, goal_id: &str, day: NaiveDate)
        -> Result<Option<DailyCompletion>>;
    /// All completions for a goal, ordered by day ascending.
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<DailyCompletion>>;
    /// Inserts the completion row and persists the recomputed streak in a
    /// single transaction. A `(goal_id, day)` unique violation aborts both
    /// writes.
    async fn insert_with_streak(
        &self,
        completion: DailyCompletion,
        streak: Streak,
    ) -> Result<(DailyCompletion, Streak)>;
}

/// Trait for completion query operations
pub trait CompletionServiceTrait: Send + Sync {
    fn get_completion_for_day(&self, goal_id: &str, day: NaiveDate)
        -> Result<Option<DailyCompletion>>;
    fn list_completions(&self, goal_id: &str) -> Result<Vec<DailyCompletion>>;
}
