use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Unified error type for form validation and backend calls.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field is missing. Raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status. Carries the status only.
    #[error("backend responded with status {0}")]
    Backend(StatusCode),

    /// The backend could not be reached at all.
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON encoding or decoding failed, on an outgoing entity or a
    /// backend payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Backend(status) => *status,
            AppError::Transport(_) | AppError::Json(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(message) => message.clone(),
            AppError::Backend(_) => "Backend request failed.".to_string(),
            AppError::Transport(_) => "Could not reach the backend.".to_string(),
            AppError::Json(_) => "Invalid JSON payload.".to_string(),
        };

        (
            status,
            Json(json!({
                "status": "error",
                "message": message
            })),
        )
            .into_response()
    }
}
