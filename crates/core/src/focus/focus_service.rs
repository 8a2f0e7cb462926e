use std::sync::Arc;

use super::focus_model::{FocusSession, FocusSessionUpdate, NewFocusSession};
use super::focus_traits::{FocusRepositoryTrait, FocusServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;

/// Service for focus sessions.
pub struct FocusService {
    repository: Arc<dyn FocusRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl FocusService {
    pub fn new(
        repository: Arc<dyn FocusRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        FocusService {
            repository,
            goal_repository,
        }
    }
}

#[async_trait]
impl FocusServiceTrait for FocusService {
    fn get_sessions(&self, goal_id: &str) -> Result<Vec<FocusSession>> {
        self.repository.list_for_goal(goal_id)
    }

    async fn start(&self, new_session: NewFocusSession) -> Result<FocusSession> {
        new_session.validate()?;
        let goal_id = new_session.goal_id.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        let _goal = self.goal_repository.get_by_id(goal_id)?;
        self.repository.insert(new_session).await
    }

    async fn update(&self, session_update: FocusSessionUpdate) -> Result<FocusSession> {
        session_update.validate()?;
        self.repository.update(session_update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_validation_bounds_completion_rate() {
        let update = FocusSessionUpdate {
            id: Some("fs1".to_string()),
            ended_at: None,
            actual_duration_minutes: None,
            distraction_events: None,
            completion_rate: Some(120),
        };
        assert!(matches!(
            update.validate().unwrap_err(),
            Error::Validation(_)
        ));

        let update = FocusSessionUpdate {
            id: Some("fs1".to_string()),
            ended_at: None,
            actual_duration_minutes: Some(-3),
            distraction_events: None,
            completion_rate: None,
        };
        assert!(matches!(
            update.validate().unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn new_session_requires_positive_planned_duration() {
        let session = NewFocusSession {
            id: None,
            goal_id: Some("g1".to_string()),
            started_at: None,
            planned_duration_minutes: 0,
        };
        assert!(matches!(
            session.validate().unwrap_err(),
            Error::Validation(_)
        ));
    }
}
