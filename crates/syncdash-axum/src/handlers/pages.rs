//! HTML dashboard and favicon.

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use syncdash_core::{classify, read_bounded};

use crate::dto::megabytes;
use crate::error::HttpError;
use crate::page::{DashboardPage, FAVICON_SVG, LoadAverage};
use crate::state::AppState;

/// `GET /` and `GET /logs`
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let ctx = state.clone();
    let page = tokio::task::spawn_blocking(move || {
        let config = &ctx.config;
        let size = std::fs::metadata(&config.sync_log).map_or(0, |m| m.len());

        DashboardPage {
            log: read_bounded(&config.sync_log, &config.limits()),
            status: classify(&config.sync_log),
            load: LoadAverage::current(),
            log_size_mb: megabytes(size),
            last_updated: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    })
    .await?;

    Ok((
        [(header::CACHE_CONTROL, "no-cache")],
        Html(page.render()),
    ))
}

/// `GET /favicon.ico`
pub async fn favicon() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "max-age=86400"),
        ],
        FAVICON_SVG,
    )
}
