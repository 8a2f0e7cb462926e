use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::streaks::Streak;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    fn list(&self) -> Result<Vec<Goal>>;
    /// Inserts the goal and its zeroed streak in a single transaction. If
    /// either insert fails, neither row is persisted.
    async fn create_with_streak(&self, new_goal: NewGoal, initial_streak: Streak) -> Result<Goal>;
    async fn update(&self, goal_update: GoalUpdate) -> Result<Goal>;
    /// Removes the goal together with its streak, completion history and
    /// related tracking records. Returns the number of goal rows removed.
    async fn delete(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: &str) -> Result<bool>;
}
