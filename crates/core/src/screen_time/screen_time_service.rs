use std::sync::Arc;

use chrono::NaiveDate;

use super::screen_time_model::{NewScreenTimeEntry, ScreenTimeEntry};
use super::screen_time_traits::{ScreenTimeRepositoryTrait, ScreenTimeServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use async_trait::async_trait;

/// Service for tracking time spent in distracting apps.
pub struct ScreenTimeService {
    repository: Arc<dyn ScreenTimeRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl ScreenTimeService {
    pub fn new(
        repository: Arc<dyn ScreenTimeRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        ScreenTimeService {
            repository,
            goal_repository,
        }
    }
}

#[async_trait]
impl ScreenTimeServiceTrait for ScreenTimeService {
    fn get_entries(&self, goal_id: &str) -> Result<Vec<ScreenTimeEntry>> {
        self.repository.list_for_goal(goal_id)
    }

    fn get_day_total(&self, goal_id: &str, day: NaiveDate) -> Result<i64> {
        self.repository.total_minutes_for_day(goal_id, day)
    }

    async fn track(&self, new_entry: NewScreenTimeEntry) -> Result<ScreenTimeEntry> {
        new_entry.validate()?;
        let goal_id = new_entry.goal_id.as_deref().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("goalId".to_string()))
        })?;
        let _goal = self.goal_repository.get_by_id(goal_id)?;
        self.repository.insert(new_entry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{Goal, GoalUpdate, NewGoal};
    use crate::streaks::Streak;
    use chrono::{NaiveDateTime, Utc};
    use std::sync::Mutex;

    struct MockGoalRepository {
        goals: Vec<Goal>,
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
            self.goals
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Goal {} not found", goal_id)))
        }

        fn list(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.clone())
        }

        async fn create_with_streak(&self, _new_goal: NewGoal, _streak: Streak) -> Result<Goal> {
            unimplemented!()
        }

        async fn update(&self, _goal_update: GoalUpdate) -> Result<Goal> {
            unimplemented!()
        }

        async fn delete(&self, _goal_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockScreenTimeRepository {
        entries: Mutex<Vec<ScreenTimeEntry>>,
    }

    #[async_trait]
    impl ScreenTimeRepositoryTrait for MockScreenTimeRepository {
        fn list_for_goal(&self, goal_id: &str) -> Result<Vec<ScreenTimeEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.goal_id == goal_id)
                .cloned()
                .collect())
        }

        fn total_minutes_for_day(&self, goal_id: &str, day: NaiveDate) -> Result<i64> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.goal_id == goal_id && e.day == day)
                .map(|e| e.time_spent_minutes as i64)
                .sum())
        }

        async fn insert(&self, new_entry: NewScreenTimeEntry) -> Result<ScreenTimeEntry> {
            let entry = ScreenTimeEntry {
                id: "st1".to_string(),
                goal_id: new_entry.goal_id.unwrap(),
                app_name: new_entry.app_name,
                time_spent_minutes: new_entry.time_spent_minutes,
                day: new_entry.day,
                created_at: Utc::now().naive_utc(),
            };
            self.entries.lock().unwrap().push(entry.clone());
            Ok(entry)
        }
    }

    fn test_goal(goal_id: &str) -> Goal {
        let now: NaiveDateTime = Utc::now().naive_utc();
        Goal {
            id: goal_id.to_string(),
            name: "Less doomscrolling".to_string(),
            deadline: now + chrono::Duration::days(30),
            reason: None,
            created_at: now,
        }
    }

    fn entry(goal_id: &str, minutes: i32) -> NewScreenTimeEntry {
        NewScreenTimeEntry {
            id: None,
            goal_id: Some(goal_id.to_string()),
            app_name: "instagram".to_string(),
            time_spent_minutes: minutes,
            day: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    fn build_service() -> ScreenTimeService {
        ScreenTimeService::new(
            Arc::new(MockScreenTimeRepository::default()),
            Arc::new(MockGoalRepository {
                goals: vec![test_goal("g1")],
            }),
        )
    }

    #[tokio::test]
    async fn track_rejects_negative_minutes_and_blank_app() {
        let service = build_service();
        assert!(matches!(
            service.track(entry("g1", -5)).await.unwrap_err(),
            Error::Validation(_)
        ));

        let mut blank = entry("g1", 10);
        blank.app_name = " ".to_string();
        assert!(matches!(
            service.track(blank).await.unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[tokio::test]
    async fn track_requires_existing_goal() {
        let service = build_service();
        assert!(matches!(
            service.track(entry("missing", 10)).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn day_total_sums_entries() {
        let service = build_service();
        service.track(entry("g1", 10)).await.unwrap();
        service.track(entry("g1", 25)).await.unwrap();
        let total = service
            .get_day_total("g1", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap();
        assert_eq!(total, 35);
    }
}
