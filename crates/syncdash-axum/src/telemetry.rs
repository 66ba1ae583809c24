//! Tracing setup for the `syncdash` binary.
//!
//! Events go to stdout and, without ANSI colors, to the server log file.
//! The file is opened in append mode and never rotated, so `POST /clear` can
//! truncate it in place.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until the
/// process exits.
pub fn init_tracing(server_log: &Path) -> Result<WorkerGuard> {
    let directory = server_log
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = server_log
        .file_name()
        .with_context(|| format!("server log path has no file name: {}", server_log.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("opening server log {}", server_log.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(guard)
}
