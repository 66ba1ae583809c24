//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing log directories.
#[derive(Debug, Error)]
pub enum PathError {
    /// Something other than a directory sits where the log directory goes.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// The log path names a filesystem root.
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),
}
