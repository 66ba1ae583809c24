//! Detached job launcher.
//!
//! Starts the sync script with its output appended to the sync log and
//! returns as soon as the process exists. Opening the log and forking run on
//! the blocking pool. On unix the child gets its own process group so
//! signals aimed at the dashboard do not reach it.

use std::fs::OpenOptions;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use async_trait::async_trait;
use syncdash_core::ports::{JobCommand, JobLauncher, LaunchError, LaunchedJob};
use tracing::{debug, info, warn};

/// [`JobLauncher`] backed by `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl DetachedLauncher {
    /// Create a new launcher.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JobLauncher for DetachedLauncher {
    async fn launch(&self, job: &JobCommand, output: &Path) -> Result<LaunchedJob, LaunchError> {
        let job = job.clone();
        let output = output.to_path_buf();
        tokio::task::spawn_blocking(move || spawn_detached(&job, &output))
            .await
            .map_err(|e| LaunchError::Internal(format!("launch task failed: {e}")))?
    }
}

fn spawn_detached(job: &JobCommand, output: &Path) -> Result<LaunchedJob, LaunchError> {
    let stdout = OpenOptions::new().create(true).append(true).open(output)?;
    let stderr = stdout.try_clone()?;

    let mut cmd = Command::new(&job.program);
    cmd.args(&job.args)
        .current_dir(&job.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr));

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    debug!(program = %job.program.display(), args = ?job.args, "Spawning job");
    let child = cmd.spawn()?;
    let pid = child.id();
    reap_in_background(child);

    Ok(LaunchedJob { pid })
}

/// Collect the exit status on a helper thread so the child never lingers
/// as a zombie. Nothing waits on this thread.
fn reap_in_background(mut child: Child) {
    let pid = child.id();
    let spawned = std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => info!(pid, %status, "Sync job exited"),
            Err(e) => warn!(pid, error = %e, "Failed to wait for sync job"),
        });

    if let Err(e) = spawned {
        warn!(pid, error = %e, "Could not start reaper thread for sync job");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn shell(script: &str, dir: &Path) -> JobCommand {
        JobCommand {
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".to_string(), script.to_string()],
            working_dir: dir.to_path_buf(),
        }
    }

    fn wait_for_contents(path: &Path, needle: &str) -> String {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let contents = fs::read_to_string(path).unwrap_or_default();
            if contents.contains(needle) || Instant::now() > deadline {
                return contents;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[tokio::test]
    async fn test_output_is_appended_to_log() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("sync.log");
        fs::write(&log, "previous run\n").unwrap();

        let launched = DetachedLauncher::new()
            .launch(&shell("echo out; echo err 1>&2", dir.path()), &log)
            .await
            .unwrap();
        assert!(launched.pid > 0);

        let contents = wait_for_contents(&log, "err");
        assert!(contents.starts_with("previous run\n"));
        assert!(contents.contains("out"));
        assert!(contents.contains("err"));
    }

    #[tokio::test]
    async fn test_job_runs_in_working_dir() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("sync.log");

        DetachedLauncher::new()
            .launch(&shell("pwd", dir.path()), &log)
            .await
            .unwrap();

        let expected = dir.path().canonicalize().unwrap();
        let contents = wait_for_contents(&log, &expected.display().to_string());
        assert!(contents.contains(&expected.display().to_string()));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("sync.log");
        fs::write(&log, "previous run\n").unwrap();
        let job = JobCommand {
            program: dir.path().join("does-not-exist"),
            args: Vec::new(),
            working_dir: dir.path().to_path_buf(),
        };

        let err = DetachedLauncher::new().launch(&job, &log).await.unwrap_err();
        assert!(matches!(err, LaunchError::Spawn(_)));
        assert_eq!(fs::read_to_string(&log).unwrap(), "previous run\n");
    }

    #[tokio::test]
    async fn test_unopenable_output_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("missing").join("sync.log");

        let err = DetachedLauncher::new()
            .launch(&shell("true", dir.path()), &log)
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::Spawn(_)));
        assert!(!log.exists());
    }
}
