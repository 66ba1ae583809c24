//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the dashboard configuration, the
//! concrete job launcher and the router are wired together.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use syncdash_core::{DashboardConfig, JobLauncher, ensure_parent_dir};
use syncdash_runtime::DetachedLauncher;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::create_router;

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Resolved dashboard configuration.
    pub config: DashboardConfig,
    /// Starts the sync job on `/run`.
    pub launcher: Arc<dyn JobLauncher>,
}

impl AxumContext {
    pub fn new(config: DashboardConfig, launcher: Arc<dyn JobLauncher>) -> Self {
        Self { config, launcher }
    }
}

/// Validate the configuration, prepare the log directory and build the
/// production context.
pub fn bootstrap(config: DashboardConfig) -> Result<AxumContext> {
    config.validate()?;
    ensure_parent_dir(&config.sync_log)
        .with_context(|| format!("preparing log directory for {}", config.sync_log.display()))?;

    info!(
        target: "syncdash.paths",
        sync_log = %config.sync_log.display(),
        server_log = %config.server_log.display(),
        job_program = %config.job_program.display(),
        job_args = ?config.job_args,
        max_log_bytes = config.max_log_bytes,
        max_lines = config.max_lines,
        "Axum bootstrap resolved paths"
    );

    let launcher: Arc<dyn JobLauncher> = Arc::new(DetachedLauncher::new());
    Ok(AxumContext::new(config, launcher))
}

/// Bind the configured port, falling back when the OS refuses it for lack of
/// privileges.
pub async fn bind_listener(config: &DashboardConfig) -> Result<TcpListener> {
    let primary = SocketAddr::new(config.bind, config.port);
    match TcpListener::bind(primary).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            warn!(
                "Permission denied for port {}, trying port {}",
                config.port, config.fallback_port
            );
            let fallback = SocketAddr::new(config.bind, config.fallback_port);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback address {fallback}"))
        }
        Err(e) => Err(e).with_context(|| format!("binding {primary}")),
    }
}

/// Start the dashboard and serve until a shutdown signal arrives.
pub async fn start_server(config: DashboardConfig) -> Result<()> {
    let ctx = bootstrap(config)?;
    let listener = bind_listener(&ctx.config).await?;
    let app = create_router(ctx);

    info!(
        "syncdash web server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Received shutdown signal");
}
