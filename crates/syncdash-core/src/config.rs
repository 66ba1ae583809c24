//! Dashboard configuration.
//!
//! Values come from built-in defaults, then `SYNCDASH_*` environment
//! variables. The binary applies command-line overrides on top.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::logs::LogLimits;
use crate::ports::JobCommand;

/// Byte ceiling above which only the tail of the log is read (500 MiB).
pub const DEFAULT_MAX_LOG_BYTES: u64 = 500 * 1024 * 1024;

/// Maximum number of log lines displayed.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Preferred HTTP port.
pub const DEFAULT_PORT: u16 = 80;

/// Port used when binding the preferred one is not permitted.
pub const DEFAULT_FALLBACK_PORT: u16 = 8080;

pub const DEFAULT_SYNC_LOG: &str = "/config/logs/sync.log";
pub const DEFAULT_SERVER_LOG: &str = "/config/logs/web_server.log";
pub const DEFAULT_JOB_PROGRAM: &str = "/bin/bash";
pub const DEFAULT_SYNC_SCRIPT: &str = "/src/sync_script.sh";

const ENV_SYNC_LOG: &str = "SYNCDASH_LOG_FILE";
const ENV_SERVER_LOG: &str = "SYNCDASH_SERVER_LOG_FILE";
const ENV_MAX_LOG_BYTES: &str = "SYNCDASH_MAX_LOG_BYTES";
const ENV_MAX_LINES: &str = "SYNCDASH_MAX_LINES";
const ENV_SHELL: &str = "SYNCDASH_SHELL";
const ENV_SYNC_SCRIPT: &str = "SYNCDASH_SYNC_SCRIPT";
const ENV_PORT: &str = "SYNCDASH_PORT";
const ENV_FALLBACK_PORT: &str = "SYNCDASH_FALLBACK_PORT";
const ENV_BIND: &str = "SYNCDASH_BIND";

/// Errors raised while building or validating configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The assembled configuration is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Log written by the sync job and displayed on the dashboard.
    pub sync_log: PathBuf,
    /// The dashboard's own log file.
    pub server_log: PathBuf,
    /// Byte ceiling for log views.
    pub max_log_bytes: u64,
    /// Line ceiling for log views.
    pub max_lines: usize,
    /// Interpreter used to run the sync script.
    pub job_program: PathBuf,
    /// Arguments passed to `job_program`, normally the script path.
    pub job_args: Vec<String>,
    /// Working directory of the sync job.
    pub job_working_dir: PathBuf,
    /// Address to listen on.
    pub bind: IpAddr,
    /// Preferred HTTP port.
    pub port: u16,
    /// Port tried when `port` needs privileges we do not have.
    pub fallback_port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sync_log: PathBuf::from(DEFAULT_SYNC_LOG),
            server_log: PathBuf::from(DEFAULT_SERVER_LOG),
            max_log_bytes: DEFAULT_MAX_LOG_BYTES,
            max_lines: DEFAULT_MAX_LINES,
            job_program: PathBuf::from(DEFAULT_JOB_PROGRAM),
            job_args: vec![DEFAULT_SYNC_SCRIPT.to_string()],
            job_working_dir: PathBuf::from("/"),
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            fallback_port: DEFAULT_FALLBACK_PORT,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `SYNCDASH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_SYNC_LOG) {
            config.sync_log = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_SERVER_LOG) {
            config.server_log = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_MAX_LOG_BYTES) {
            config.max_log_bytes = parse_value(ENV_MAX_LOG_BYTES, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LINES) {
            config.max_lines = parse_value(ENV_MAX_LINES, &value)?;
        }
        if let Some(shell) = lookup(ENV_SHELL) {
            config.job_program = PathBuf::from(shell);
        }
        if let Some(script) = lookup(ENV_SYNC_SCRIPT) {
            config.job_args = vec![script];
        }
        if let Some(value) = lookup(ENV_PORT) {
            config.port = parse_value(ENV_PORT, &value)?;
        }
        if let Some(value) = lookup(ENV_FALLBACK_PORT) {
            config.fallback_port = parse_value(ENV_FALLBACK_PORT, &value)?;
        }
        if let Some(value) = lookup(ENV_BIND) {
            config.bind = parse_value(ENV_BIND, &value)?;
        }

        Ok(config)
    }

    /// Reject configurations that would make the dashboard useless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_log_bytes == 0 {
            return Err(ConfigError::Invalid("max_log_bytes must be positive".into()));
        }
        if self.max_lines == 0 {
            return Err(ConfigError::Invalid("max_lines must be positive".into()));
        }
        if self.job_program.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("job program cannot be empty".into()));
        }
        if self.sync_log.as_os_str().is_empty() || self.server_log.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("log paths cannot be empty".into()));
        }
        Ok(())
    }

    /// Ceilings used when reading the sync log.
    pub const fn limits(&self) -> LogLimits {
        LogLimits {
            max_bytes: self.max_log_bytes,
            max_lines: self.max_lines,
        }
    }

    /// The command that runs one sync pass.
    pub fn job_command(&self) -> JobCommand {
        JobCommand {
            program: self.job_program.clone(),
            args: self.job_args.clone(),
            working_dir: self.job_working_dir.clone(),
        }
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
