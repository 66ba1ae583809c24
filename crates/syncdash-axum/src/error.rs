//! Axum-specific error types and mappings.
//!
//! GET endpoints answer failures with a small JSON error body. POST actions
//! use the `{status, message}` envelope the dashboard script expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use syncdash_core::ports::LaunchError;
use thiserror::Error;

use crate::dto::ActionResponse;

/// Generic message for job launch failures the OS reported.
pub const JOB_START_FAILED: &str = "Failed to start sync process";

/// Generic message for everything else.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (malformed body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body over the size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// A dashboard action failed; the message is safe to show to operators.
    #[error("Action failed: {0}")]
    ActionFailed(&'static str),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::ActionFailed(message) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(ActionResponse::error(message)),
                )
                    .into_response();
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<LaunchError> for HttpError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::Spawn(_) => Self::ActionFailed(JOB_START_FAILED),
            LaunchError::Internal(_) => Self::ActionFailed(INTERNAL_ERROR),
        }
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("Background task failed: {err}"))
    }
}
