use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use goalstreak_core::completions::DailyCompletion;

async fn list_completions(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DailyCompletion>>> {
    let completions = state.completion_service.list_completions(&goal_id)?;
    Ok(Json(completions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/completions/{goal_id}", get(list_completions))
}
