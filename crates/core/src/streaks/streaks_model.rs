//! Streak domain model and the recompute rules that derive it.
//!
//! Calendar policy: a "day" is a UTC calendar date (the HTTP layer truncates
//! `Utc::now()` with `date_naive()` before calling in). Uniqueness and
//! adjacency are plain `NaiveDate` comparisons; timestamps never reach this
//! module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived consecutive-day statistics for a goal. One row per goal, created
/// zeroed alongside it and mutated only through the recompute step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub id: String,
    pub goal_id: String,
    pub current_streak: i32,
    pub best_streak: i32,
    pub total_completed: i32,
    pub last_completed_date: Option<NaiveDate>,
}

impl Streak {
    /// The all-zero streak created in the same transaction as its goal.
    pub fn zeroed(goal_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            current_streak: 0,
            best_streak: 0,
            total_completed: 0,
            last_completed_date: None,
        }
    }

    /// Applies one accepted completion for `day` and returns the updated
    /// streak.
    ///
    /// The completion is consecutive when the stored last completed date is
    /// exactly the day before `day`. Anything else (first completion ever,
    /// or a gap of two or more days) restarts the run at 1 - the day just
    /// completed counts itself. There is no active decay: a goal that is
    /// never completed again keeps its last `current_streak` until the next
    /// completion exposes the gap.
    pub fn advance(&self, day: NaiveDate) -> Streak {
        let consecutive = day
            .pred_opt()
            .map_or(false, |yesterday| self.last_completed_date == Some(yesterday));
        let current_streak = if consecutive {
            self.current_streak + 1
        } else {
            1
        };
        Streak {
            id: self.id.clone(),
            goal_id: self.goal_id.clone(),
            current_streak,
            best_streak: self.best_streak.max(current_streak),
            total_completed: self.total_completed + 1,
            last_completed_date: Some(day),
        }
    }
}

/// Folds a chronologically ordered completion history into a streak from
/// scratch.
///
/// The service uses the incremental [`Streak::advance`] path; this fold is
/// the reference implementation and must agree with it for every strictly
/// increasing sequence of days.
pub fn replay<I>(goal_id: &str, days: I) -> Streak
where
    I: IntoIterator<Item = NaiveDate>,
{
    days.into_iter()
        .fold(Streak::zeroed(goal_id), |streak, day| streak.advance(day))
}
