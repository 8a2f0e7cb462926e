use chrono::NaiveDate;

use crate::errors::Result;
use crate::screen_time::screen_time_model::{NewScreenTimeEntry, ScreenTimeEntry};
use async_trait::async_trait;

/// Trait for screen time repository operations
#[async_trait]
pub trait ScreenTimeRepositoryTrait: Send + Sync {
    /// Entries for a goal, newest day first.
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<ScreenTimeEntry>>;
    fn total_minutes_for_day(&self, goal_id: &str, day: NaiveDate) -> Result<i64>;
    async fn insert(&self, new_entry: NewScreenTimeEntry) -> Result<ScreenTimeEntry>;
}

/// Trait for screen time service operations
#[async_trait]
pub trait ScreenTimeServiceTrait: Send + Sync {
    fn get_entries(&self, goal_id: &str) -> Result<Vec<ScreenTimeEntry>>;
    fn get_day_total(&self, goal_id: &str, day: NaiveDate) -> Result<i64>;
    async fn track(&self, new_entry: NewScreenTimeEntry) -> Result<ScreenTimeEntry>;
}
