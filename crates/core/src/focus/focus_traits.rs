use crate::errors::Result;
use crate::focus::focus_model::{FocusSession, FocusSessionUpdate, NewFocusSession};
use async_trait::async_trait;

/// Trait for focus session repository operations
#[async_trait]
pub trait FocusRepositoryTrait: Send + Sync {
    /// Sessions for a goal, most recently started first.
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<FocusSession>>;
    async fn insert(&self, new_session: NewFocusSession) -> Result<FocusSession>;
    async fn update(&self, session_update: FocusSessionUpdate) -> Result<FocusSession>;
}

/// Trait for focus session service operations
#[async_trait]
pub trait FocusServiceTrait: Send + Sync {
    fn get_sessions(&self, goal_id: &str) -> Result<Vec<FocusSession>>;
    async fn start(&self, new_session: NewFocusSession) -> Result<FocusSession>;
    async fn update(&self, session_update: FocusSessionUpdate) -> Result<FocusSession>;
}
