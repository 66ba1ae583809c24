//! Job launcher trait definition.
//!
//! This port starts the external sync job as a detached background process.
//! The dashboard never waits for, monitors or cancels the job; the only
//! thing it learns is the process id.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A command line to run as a detached job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCommand {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments passed to `program`.
    pub args: Vec<String>,
    /// Working directory for the child.
    pub working_dir: PathBuf,
}

/// Handle returned once a job has been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchedJob {
    /// Operating system process id.
    pub pid: u32,
}

/// Errors raised while starting a job.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS refused to open the output sink or spawn the process.
    #[error("Failed to spawn job: {0}")]
    Spawn(String),

    /// Anything else that went wrong.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        Self::Spawn(err.to_string())
    }
}

/// Starts detached jobs whose output is appended to a log file.
///
/// Implementations must return as soon as the process exists.
#[async_trait]
pub trait JobLauncher: Send + Sync {
    /// Start `job` with stdout and stderr appended to `output`.
    async fn launch(&self, job: &JobCommand, output: &Path) -> Result<LaunchedJob, LaunchError>;
}
