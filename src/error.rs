//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::commission::AmountOutOfRange;
use crate::itinerary::ScheduleError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Travel API returned {status} for {path}")]
    Upstream { status: u16, path: String },

    #[error("Travel API sent an unreadable response for {path}")]
    UpstreamPayload { path: String },

    #[error("Travel API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Schedule(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_schedule"),
            AppError::Upstream { status, .. } if *status == 401 => {
                (StatusCode::UNAUTHORIZED, "unauthorized")
            }
            AppError::Upstream { status, .. } if *status == 403 => {
                (StatusCode::FORBIDDEN, "forbidden")
            }
            AppError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::UpstreamPayload { .. } => {
                (StatusCode::BAD_GATEWAY, "upstream_invalid_response")
            }
            AppError::Transport(e) if e.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout")
            }
            AppError::Transport(_) => (StatusCode::BAD_GATEWAY, "upstream_unreachable"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let message = match &self {
            AppError::Upstream { status, path } => {
                tracing::warn!("Travel API returned {} for {}", status, path);
                self.to_string()
            }
            AppError::Transport(e) => {
                tracing::error!("Travel API transport error: {}", e);
                "Travel API unreachable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { error_type, message })).into_response()
    }
}

impl From<AmountOutOfRange> for AppError {
    fn from(e: AmountOutOfRange) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
