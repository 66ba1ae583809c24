//! HTTP request handlers for the dashboard.
//!
//! Handlers are thin: they move blocking file work onto the blocking pool and
//! delegate to `syncdash-core`.

pub mod actions;
pub mod pages;
pub mod status;

use crate::error::HttpError;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> HttpError {
    HttpError::NotFound("Not found".to_string())
}
