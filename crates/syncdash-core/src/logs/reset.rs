//! Truncate-and-reinitialize for log files cleared from the dashboard.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use chrono::NaiveDateTime;

/// Marker written to the sync log when it is cleared.
pub const SYNC_LOG_CLEARED: &str = super::status::MARKER_CLEARED;

/// Marker written to the server log when it is cleared.
pub const SERVER_LOG_CLEARED: &str = "Server logs cleared via web interface";

/// Replace the contents of `path` with a single timestamped `marker` line.
///
/// Missing files are left alone and `Ok(false)` is returned.
pub fn reset_log(path: &Path, marker: &str, now: NaiveDateTime) -> io::Result<bool> {
    let mut file = match OpenOptions::new().write(true).truncate(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    writeln!(file, "[{}] [INFO] {marker}", now.format("%Y-%m-%d %H:%M:%S"))?;
    file.flush()?;
    Ok(true)
}
