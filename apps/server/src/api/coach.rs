use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, routing::post, Json, Router};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoachRequest {
    message: String,
    goal_name: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CoachResponse {
    response: String,
}

/// The coach never fails: provider errors degrade to a canned line inside
/// the service, so this handler is infallible.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CoachRequest>,
) -> Json<CoachResponse> {
    let response = state
        .coach_service
        .chat(&payload.message, &payload.goal_name)
        .await;
    Json(CoachResponse { response })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/coach/chat", post(chat))
}
