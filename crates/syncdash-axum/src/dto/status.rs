//! Machine-readable dashboard status.

use serde::Serialize;

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDto {
    /// Local time of the response, ISO-8601 with microseconds.
    pub timestamp: String,
    pub log_exists: bool,
    /// Sync log size in MiB, rounded to two decimals.
    pub log_size: f64,
    /// Always `online`; answering at all is the liveness signal.
    pub server_uptime: &'static str,
}

/// Bytes to MiB, rounded to two decimals.
pub fn megabytes(bytes: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}
