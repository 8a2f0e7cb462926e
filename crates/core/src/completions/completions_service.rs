use std::sync::Arc;

use chrono::NaiveDate;

use super::completions_model::DailyCompletion;
use super::completions_traits::{CompletionRepositoryTrait, CompletionServiceTrait};
use crate::errors::Result;

/// Query-side service over the completion ledger. Recording goes through the
/// streak service, which owns the recompute orchestration.
pub struct CompletionService {
    repository: Arc<dyn CompletionRepositoryTrait>,
}

impl CompletionService {
    pub fn new(repository: Arc<dyn CompletionRepositoryTrait>) -> Self {
        CompletionService { repository }
    }
}

impl CompletionServiceTrait for CompletionService {
    fn get_completion_for_day(
        &self,
        goal_id: &str,
        day: NaiveDate,
    ) -> Result<Option<DailyCompletion>> {
        self.repository.find_by_goal_and_day(goal_id, day)
    }

    fn list_completions(&self, goal_id: &str) -> Result<Vec<DailyCompletion>> {
        self.repository.list_for_goal(goal_id)
    }
}
