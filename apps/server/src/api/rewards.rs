use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use goalstreak_core::rewards::{NewReward, Reward};

async fn list_rewards(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Reward>>> {
    let rewards = state.reward_service.get_rewards(&goal_id)?;
    Ok(Json(rewards))
}

async fn create_reward(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewReward>,
) -> ApiResult<(StatusCode, Json<Reward>)> {
    payload.goal_id = Some(goal_id);
    let reward = state.reward_service.grant(payload).await?;
    Ok((StatusCode::CREATED, Json(reward)))
}

async fn claim_reward(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Reward>> {
    let reward = state.reward_service.claim(&id).await?;
    Ok(Json(reward))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rewards/{goal_id}", get(list_rewards).post(create_reward))
        .route("/rewards/{id}/claim", post(claim_reward))
}
