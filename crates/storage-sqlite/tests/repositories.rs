//! Repository tests against a real on-disk SQLite database.

use chrono::{Duration, NaiveDate, Utc};
use tempfile::tempdir;
use uuid::Uuid;

use goalstreak_core::completions::{CompletionRepositoryTrait, DailyCompletion};
use goalstreak_core::errors::{DatabaseError, Error};
use goalstreak_core::goals::{GoalRepositoryTrait, GoalUpdate, NewGoal};
use goalstreak_core::streaks::{Streak, StreakRepositoryTrait};
use goalstreak_storage_sqlite::completions::CompletionRepository;
use goalstreak_storage_sqlite::db::{self, spawn_writer};
use goalstreak_storage_sqlite::goals::GoalRepository;
use goalstreak_storage_sqlite::streaks::StreakRepository;

struct Repos {
    goals: GoalRepository,
    streaks: StreakRepository,
    completions: CompletionRepository,
    _tmp: tempfile::TempDir,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> Repos {
    let tmp = tempdir().unwrap();
    let db_path = db::init(tmp.path().join("test.db").to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    Repos {
        goals: GoalRepository::new(pool.clone(), writer.clone()),
        streaks: StreakRepository::new(pool.clone()),
        completions: CompletionRepository::new(pool, writer),
        _tmp: tmp,
    }
}

async fn create_goal(repos: &Repos, name: &str) -> String {
    let goal_id = Uuid::new_v4().to_string();
    let new_goal = NewGoal {
        id: Some(goal_id.clone()),
        name: name.to_string(),
        deadline: Utc::now().naive_utc() + Duration::days(30),
        reason: None,
    };
    let streak = Streak::zeroed(&goal_id);
    repos
        .goals
        .create_with_streak(new_goal, streak)
        .await
        .unwrap();
    goal_id
}

#[tokio::test]
async fn goal_creation_seeds_a_zeroed_streak() {
    let repos = setup();
    let goal_id = create_goal(&repos, "Read daily").await;

    let streak = repos.streaks.get_by_goal_id(&goal_id).unwrap();
    assert_eq!(streak.goal_id, goal_id);
    assert_eq!(streak.current_streak, 0);
    assert_eq!(streak.best_streak, 0);
    assert_eq!(streak.total_completed, 0);
    assert_eq!(streak.last_completed_date, None);
}

#[tokio::test]
async fn duplicate_day_insert_hits_the_unique_index() {
    let repos = setup();
    let goal_id = create_goal(&repos, "Read daily").await;
    let d = day(2025, 6, 1);

    let streak = repos.streaks.get_by_goal_id(&goal_id).unwrap();
    let advanced = streak.advance(d);
    repos
        .completions
        .insert_with_streak(DailyCompletion::for_day(&goal_id, d), advanced.clone())
        .await
        .unwrap();

    // A second record for the same calendar day aborts the transaction.
    let err = repos
        .completions
        .insert_with_streak(DailyCompletion::for_day(&goal_id, d), advanced.advance(d))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));

    // The losing transaction left the streak untouched.
    let streak = repos.streaks.get_by_goal_id(&goal_id).unwrap();
    assert_eq!(streak.total_completed, 1);
    assert_eq!(repos.completions.list_for_goal(&goal_id).unwrap().len(), 1);
}

#[tokio::test]
async fn completions_are_listed_in_day_order() {
    let repos = setup();
    let goal_id = create_goal(&repos, "Read daily").await;

    let mut streak = repos.streaks.get_by_goal_id(&goal_id).unwrap();
    for d in [day(2025, 6, 3), day(2025, 6, 1), day(2025, 6, 2)] {
        streak = streak.advance(d);
        repos
            .completions
            .insert_with_streak(DailyCompletion::for_day(&goal_id, d), streak.clone())
            .await
            .unwrap();
    }

    let days: Vec<NaiveDate> = repos
        .completions
        .list_for_goal(&goal_id)
        .unwrap()
        .into_iter()
        .map(|c| c.day)
        .collect();
    assert_eq!(days, vec![day(2025, 6, 1), day(2025, 6, 2), day(2025, 6, 3)]);
}

#[tokio::test]
async fn goal_delete_cascades_to_streak_and_history() {
    let repos = setup();
    let goal_id = create_goal(&repos, "Read daily").await;
    let d = day(2025, 6, 1);
    let advanced = repos.streaks.get_by_goal_id(&goal_id).unwrap().advance(d);
    repos
        .completions
        .insert_with_streak(DailyCompletion::for_day(&goal_id, d), advanced)
        .await
        .unwrap();

    assert_eq!(repos.goals.delete(&goal_id).await.unwrap(), 1);

    assert!(matches!(
        repos.streaks.get_by_goal_id(&goal_id).unwrap_err(),
        Error::NotFound(_)
    ));
    assert!(repos.completions.list_for_goal(&goal_id).unwrap().is_empty());

    // Deleting again removes nothing.
    assert_eq!(repos.goals.delete(&goal_id).await.unwrap(), 0);
}

#[tokio::test]
async fn goal_update_touches_only_the_given_fields() {
    let repos = setup();
    let goal_id = create_goal(&repos, "Read daily").await;
    let before = repos.goals.get_by_id(&goal_id).unwrap();

    let updated = repos
        .goals
        .update(GoalUpdate {
            id: Some(goal_id.clone()),
            name: Some("Read nightly".to_string()),
            deadline: None,
            reason: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Read nightly");
    assert_eq!(updated.deadline, before.deadline);
    assert_eq!(updated.reason, before.reason);
    assert_eq!(updated.created_at, before.created_at);
}
