//! Log file views: bounded reading, error summaries, status classification
//! and clearing.
//!
//! Every operation re-reads the filesystem. Nothing is cached between calls.

mod reader;
mod reset;
mod status;
mod summary;
mod tail;

pub use reader::{LOG_NOT_FOUND, LogLimits, LogView, read_bounded};
pub use reset::{SERVER_LOG_CLEARED, SYNC_LOG_CLEARED, reset_log};
pub use status::{
    MARKER_CLEARED, MARKER_COMPLETED, MARKER_FAILED, MARKER_STARTED, STATUS_TAIL_BYTES,
    STATUS_TAIL_LINES, SyncStatus, classify,
};
pub use summary::{
    ErrorEntry, ErrorSummary, MAX_ERRORS_TO_SCAN, MAX_ERRORS_TO_SHOW, MAX_SUMMARY_CHARS, summarize,
};
