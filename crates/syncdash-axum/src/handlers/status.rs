//! JSON status endpoint.

use axum::Json;
use axum::extract::State;

use crate::dto::{StatusDto, megabytes};
use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/status`
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusDto>, HttpError> {
    let sync_log = state.config.sync_log.clone();
    let (log_exists, size) = tokio::task::spawn_blocking(move || {
        std::fs::metadata(&sync_log).map_or((false, 0), |meta| (true, meta.len()))
    })
    .await?;

    Ok(Json(StatusDto {
        timestamp: chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        log_exists,
        log_size: megabytes(size),
        server_uptime: "online",
    }))
}
