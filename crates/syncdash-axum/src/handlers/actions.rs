//! POST actions: clear logs and start a sync run.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderMap;
use syncdash_core::logs::{SERVER_LOG_CLEARED, SYNC_LOG_CLEARED};
use syncdash_core::reset_log;
use tracing::{error, info};

use crate::dto::ActionResponse;
use crate::error::{HttpError, INTERNAL_ERROR};
use crate::guard::read_guarded_body;
use crate::state::AppState;

/// `POST /clear`
///
/// Truncates the sync log and the server log, leaving a single marker line
/// in each. Missing files are left missing.
pub async fn clear(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<ActionResponse>, HttpError> {
    read_guarded_body(&headers, body).await?;

    let ctx = state.clone();
    tokio::task::spawn_blocking(move || {
        let now = chrono::Local::now().naive_local();
        reset_log(&ctx.config.sync_log, SYNC_LOG_CLEARED, now)?;
        reset_log(&ctx.config.server_log, SERVER_LOG_CLEARED, now)?;
        Ok::<_, std::io::Error>(())
    })
    .await?
    .map_err(|e| {
        error!("Failed to clear logs: {}", e);
        HttpError::ActionFailed(INTERNAL_ERROR)
    })?;

    info!("Logs cleared via web interface");
    Ok(Json(ActionResponse::success()))
}

/// `POST /run`
///
/// Starts the sync job detached from the request; its output is appended to
/// the sync log.
pub async fn run(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<ActionResponse>, HttpError> {
    read_guarded_body(&headers, body).await?;

    let job = state.config.job_command();
    match state.launcher.launch(&job, &state.config.sync_log).await {
        Ok(launched) => {
            info!(pid = launched.pid, "Sync script started via web interface");
            Ok(Json(ActionResponse::started(launched.pid)))
        }
        Err(e) => {
            error!(program = %job.program.display(), "Failed to start sync script: {}", e);
            Err(e.into())
        }
    }
}
