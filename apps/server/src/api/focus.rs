use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use goalstreak_core::focus::{FocusSession, FocusSessionUpdate, NewFocusSession};

async fn list_sessions(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FocusSession>>> {
    let sessions = state.focus_service.get_sessions(&goal_id)?;
    Ok(Json(sessions))
}

async fn start_session(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewFocusSession>,
) -> ApiResult<(StatusCode, Json<FocusSession>)> {
    payload.goal_id = Some(goal_id);
    let session = state.focus_service.start(payload).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

async fn update_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<FocusSessionUpdate>,
) -> ApiResult<Json<FocusSession>> {
    payload.id = Some(id);
    let session = state.focus_service.update(payload).await?;
    Ok(Json(session))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/focus-sessions/{goal_id}",
            get(list_sessions).post(start_session).put(update_session),
        )
}
