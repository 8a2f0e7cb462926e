use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goalstreak_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    /// Machine-readable code for domain failures the UI must distinguish.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, None, e.to_string()),
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, None, e.to_string()),
                CoreError::AlreadyCompleted(_) => (
                    StatusCode::BAD_REQUEST,
                    Some("ALREADY_COMPLETED"),
                    e.to_string(),
                ),
                _ => {
                    tracing::error!("Internal error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, None, e.to_string())
                }
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, None, self.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, None, reason.clone()),
            ApiError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                (StatusCode::INTERNAL_SERVER_ERROR, None, reason.clone())
            }
            ApiError::Anyhow(e) => {
                tracing::error!("Internal error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None, self.to_string())
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            error,
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
