use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::streaks_model::Streak;
use super::streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
use crate::completions::{CompletionRepositoryTrait, DailyCompletion};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;

/// Service orchestrating the completion ledger and the streak recompute.
pub struct StreakService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    streak_repository: Arc<dyn StreakRepositoryTrait>,
    completion_repository: Arc<dyn CompletionRepositoryTrait>,
}

impl StreakService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        streak_repository: Arc<dyn StreakRepositoryTrait>,
        completion_repository: Arc<dyn CompletionRepositoryTrait>,
    ) -> Self {
        StreakService {
            goal_repository,
            streak_repository,
            completion_repository,
        }
    }
}

#[async_trait]
impl StreakServiceTrait for StreakService {
    fn get_streak(&self, goal_id: &str) -> Result<Streak> {
        self.streak_repository.get_by_goal_id(goal_id)
    }

    async fn record_completion(&self, goal_id: &str, day: NaiveDate) -> Result<Streak> {
        let _goal = self.goal_repository.get_by_id(goal_id)?;
        let streak = self.streak_repository.get_by_goal_id(goal_id)?;

        if let Some(existing) = self
            .completion_repository
            .find_by_goal_and_day(goal_id, day)?
        {
            if existing.completed {
                return Err(Error::AlreadyCompleted(format!(
                    "Goal {} already has a completion for {}",
                    goal_id, day
                )));
            }
        }

        // Out-of-order days would silently corrupt the adjacency rule, so
        // they are rejected instead of being folded in.
        if let Some(last) = streak.last_completed_date {
            if day < last {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Completion day {} precedes the last completed day {}",
                    day, last
                ))));
            }
        }

        let updated = streak.advance(day);
        let completion = DailyCompletion::for_day(goal_id, day);
        debug!(
            "Recording completion for goal {} on {}: current {} best {} total {}",
            goal_id, day, updated.current_streak, updated.best_streak, updated.total_completed
        );

        // The insert and the streak update share one transaction. If two
        // submissions race past the check above, the loser hits the
        // (goal_id, day) unique index and must surface as "already
        // completed", not as a double increment.
        match self
            .completion_repository
            .insert_with_streak(completion, updated)
            .await
        {
            Ok((_, streak)) => Ok(streak),
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                Err(Error::AlreadyCompleted(format!(
                    "Goal {} already has a completion for {}",
                    goal_id, day
                )))
            }
            Err(e) => Err(e),
        }
    }
}
