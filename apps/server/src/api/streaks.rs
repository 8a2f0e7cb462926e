use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use goalstreak_core::streaks::Streak;

async fn get_streak(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Streak>> {
    let streak = state.streak_service.get_streak(&goal_id)?;
    Ok(Json(streak))
}

/// Marks today (UTC calendar date) complete and returns the updated streak.
/// A repeated call on the same day comes back as a 400 with the
/// ALREADY_COMPLETED error code.
async fn complete_today(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Streak>> {
    let today = Utc::now().date_naive();
    let streak = state
        .streak_service
        .record_completion(&goal_id, today)
        .await?;
    Ok(Json(streak))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/streaks/{goal_id}", get(get_streak))
        .route("/streaks/{goal_id}/complete", post(complete_today))
}
