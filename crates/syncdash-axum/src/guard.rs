//! Request hardening for the POST actions: body size limit, JSON shape check
//! and defensive response headers.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::HttpError;

/// Largest request body accepted by `/clear` and `/run`.
pub const MAX_BODY_BYTES: usize = 1024;

const BODY_TOO_LARGE: &str = "Request entity too large";
const INVALID_REQUEST: &str = "Invalid request data";

/// Read a POST body, enforcing [`MAX_BODY_BYTES`] and rejecting malformed
/// JSON.
///
/// The declared `Content-Length` is checked before anything is read; the
/// actual body is then read with the same ceiling so a lying or missing
/// header cannot bypass it.
pub async fn read_guarded_body(headers: &HeaderMap, body: Body) -> Result<Bytes, HttpError> {
    if let Some(declared) = headers.get(header::CONTENT_LENGTH) {
        let declared = declared
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| HttpError::BadRequest(INVALID_REQUEST.to_string()))?;
        if declared > MAX_BODY_BYTES as u64 {
            warn!(declared, "Rejected oversized request body");
            return Err(HttpError::PayloadTooLarge(BODY_TOO_LARGE.to_string()));
        }
    }

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            warn!("Rejected request body: {}", e);
            HttpError::PayloadTooLarge(BODY_TOO_LARGE.to_string())
        })?;

    if !bytes.is_empty() && is_json(headers) {
        serde_json::from_slice::<serde_json::Value>(&bytes).map_err(|e| {
            warn!("Rejected malformed JSON body: {}", e);
            HttpError::BadRequest(INVALID_REQUEST.to_string())
        })?;
    }

    Ok(bytes)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

/// Middleware adding the security headers every action response carries.
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    response
}
