use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use goalstreak_core::screen_time::{NewScreenTimeEntry, ScreenTimeEntry};

async fn list_entries(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ScreenTimeEntry>>> {
    let entries = state.screen_time_service.get_entries(&goal_id)?;
    Ok(Json(entries))
}

async fn today_total(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<i64>> {
    let total = state
        .screen_time_service
        .get_day_total(&goal_id, Utc::now().date_naive())?;
    Ok(Json(total))
}

async fn create_entry(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewScreenTimeEntry>,
) -> ApiResult<(StatusCode, Json<ScreenTimeEntry>)> {
    payload.goal_id = Some(goal_id);
    let entry = state.screen_time_service.track(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/screen-time/{goal_id}",
            get(list_entries).post(create_entry),
        )
        .route("/screen-time/{goal_id}/today", get(today_total))
}
