//! Sync status classification from the tail of the sync log.
//!
//! The sync job writes fixed marker phrases; changing them breaks this
//! classifier. Only the last few non-empty lines are inspected, newest
//! first, so a late completion line wins over an earlier "Starting" line.

use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use super::tail::{decode_lenient, read_tail};

/// Bytes read from the end of the log when classifying.
pub const STATUS_TAIL_BYTES: u64 = 1024;

/// Number of trailing non-empty lines inspected.
pub const STATUS_TAIL_LINES: usize = 5;

pub const MARKER_COMPLETED: &str = "All syncs completed successfully";
pub const MARKER_FAILED: &str = "Some syncs failed. Check logs for details.";
pub const MARKER_STARTED: &str = "Starting sync process.";
pub const MARKER_CLEARED: &str = "Logs cleared via web interface";

const COLOR_NEUTRAL: &str = "#7d8590";
const COLOR_SUCCESS: &str = "#3fb950";
const COLOR_WARNING: &str = "#d29922";
const COLOR_INFO: &str = "#79c0ff";
const COLOR_ERROR: &str = "#f85149";

/// Coarse run state of the sync job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// The log file does not exist.
    Unknown,
    /// The log file exists but is empty.
    NoLogs,
    /// A run is in progress, or no terminal marker is visible.
    Running,
    /// The last run finished without errors.
    Completed,
    /// The last run finished and at least one route failed.
    CompletedWithErrors,
    /// Logs were cleared and nothing ran since.
    NoRunYet,
    /// The log could not be read.
    Error,
}

impl SyncStatus {
    /// Human-readable label shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "⚪ Unknown",
            Self::NoLogs => "⚪ No logs",
            Self::Running => "🔵 Running",
            Self::Completed => "🟢 Completed",
            Self::CompletedWithErrors => "🟡 Completed with errors",
            Self::NoRunYet => "⚪ No run yet",
            Self::Error => "❌ Error",
        }
    }

    /// CSS color used to render the label.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unknown | Self::NoLogs | Self::NoRunYet => COLOR_NEUTRAL,
            Self::Running => COLOR_INFO,
            Self::Completed => COLOR_SUCCESS,
            Self::CompletedWithErrors => COLOR_WARNING,
            Self::Error => COLOR_ERROR,
        }
    }

    fn from_marker(line: &str) -> Option<Self> {
        if line.contains(MARKER_COMPLETED) {
            Some(Self::Completed)
        } else if line.contains(MARKER_FAILED) {
            Some(Self::CompletedWithErrors)
        } else if line.contains(MARKER_STARTED) {
            Some(Self::Running)
        } else if line.contains(MARKER_CLEARED) {
            Some(Self::NoRunYet)
        } else {
            None
        }
    }
}

/// Classify the sync job state from the log at `path`.
pub fn classify(path: &Path) -> SyncStatus {
    match try_classify(path) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error checking sync status");
            SyncStatus::Error
        }
    }
}

fn try_classify(path: &Path) -> io::Result<SyncStatus> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SyncStatus::Unknown),
        Err(e) => return Err(e),
    };

    let size = file.metadata()?.len();
    if size == 0 {
        return Ok(SyncStatus::NoLogs);
    }

    let tail = decode_lenient(&read_tail(&mut file, size, STATUS_TAIL_BYTES)?);
    let recent: Vec<&str> = tail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let window = &recent[recent.len().saturating_sub(STATUS_TAIL_LINES)..];

    Ok(window
        .iter()
        .rev()
        .find_map(|line| SyncStatus::from_marker(line))
        .unwrap_or(SyncStatus::Running))
}
