use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use goalstreak_core::{
    coach::{CoachService, CoachServiceTrait, HttpCoachProvider},
    completions::{CompletionService, CompletionServiceTrait},
    focus::{FocusService, FocusServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    rewards::{RewardService, RewardServiceTrait},
    screen_time::{ScreenTimeService, ScreenTimeServiceTrait},
    streaks::{StreakService, StreakServiceTrait},
};
use goalstreak_storage_sqlite::{
    completions::CompletionRepository, db, focus::FocusRepository, goals::GoalRepository,
    rewards::RewardRepository, screen_time::ScreenTimeRepository, streaks::StreakRepository,
};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub streak_service: Arc<dyn StreakServiceTrait>,
    pub completion_service: Arc<dyn CompletionServiceTrait>,
    pub screen_time_service: Arc<dyn ScreenTimeServiceTrait>,
    pub reward_service: Arc<dyn RewardServiceTrait>,
    pub focus_service: Arc<dyn FocusServiceTrait>,
    pub coach_service: Arc<dyn CoachServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("GS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let streak_repository = Arc::new(StreakRepository::new(pool.clone()));
    let completion_repository = Arc::new(CompletionRepository::new(pool.clone(), writer.clone()));
    let screen_time_repository = Arc::new(ScreenTimeRepository::new(pool.clone(), writer.clone()));
    let reward_repository = Arc::new(RewardRepository::new(pool.clone(), writer.clone()));
    let focus_repository = Arc::new(FocusRepository::new(pool.clone(), writer));

    let coach_provider = HttpCoachProvider::new(
        config.coach_api_url.clone(),
        config.coach_api_key.clone(),
        config.coach_model.clone(),
    );

    let state = AppState {
        goal_service: Arc::new(GoalService::new(goal_repository.clone())),
        streak_service: Arc::new(StreakService::new(
            goal_repository.clone(),
            streak_repository,
            completion_repository.clone(),
        )),
        completion_service: Arc::new(CompletionService::new(completion_repository)),
        screen_time_service: Arc::new(ScreenTimeService::new(
            screen_time_repository,
            goal_repository.clone(),
        )),
        reward_service: Arc::new(RewardService::new(
            reward_repository,
            goal_repository.clone(),
        )),
        focus_service: Arc::new(FocusService::new(focus_repository, goal_repository)),
        coach_service: Arc::new(CoachService::new(Arc::new(coach_provider))),
        db_path,
    };
    Ok(Arc::new(state))
}
