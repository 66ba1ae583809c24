//! Command-line flags for the `syncdash` binary.
//!
//! Flags override `SYNCDASH_*` environment values, which override the
//! built-in defaults.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use syncdash_core::DashboardConfig;

/// Web dashboard for an rsync backup job.
#[derive(Debug, Parser)]
#[command(name = "syncdash")]
#[command(about = "Serve a web dashboard for an rsync backup job")]
#[command(version)]
pub struct Cli {
    /// Preferred HTTP port
    #[arg(long)]
    pub port: Option<u16>,

    /// Port used when binding the preferred one is not permitted
    #[arg(long = "fallback-port")]
    pub fallback_port: Option<u16>,

    /// Address to listen on
    #[arg(long)]
    pub bind: Option<IpAddr>,

    /// Sync log displayed on the dashboard
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// The dashboard's own log file
    #[arg(long = "server-log-file")]
    pub server_log_file: Option<PathBuf>,

    /// Maximum number of log lines to display
    #[arg(long = "max-lines")]
    pub max_lines: Option<usize>,

    /// Maximum number of log bytes to read
    #[arg(long = "max-log-bytes")]
    pub max_log_bytes: Option<u64>,

    /// Script run by the "Run Sync Now" button
    #[arg(long = "sync-script")]
    pub sync_script: Option<String>,
}

impl Cli {
    /// Apply every flag that was given on top of `config`.
    pub fn apply_to(self, config: &mut DashboardConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(port) = self.fallback_port {
            config.fallback_port = port;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(path) = self.log_file {
            config.sync_log = path;
        }
        if let Some(path) = self.server_log_file {
            config.server_log = path;
        }
        if let Some(lines) = self.max_lines {
            config.max_lines = lines;
        }
        if let Some(bytes) = self.max_log_bytes {
            config.max_log_bytes = bytes;
        }
        if let Some(script) = self.sync_script {
            config.job_args = vec![script];
        }
    }
}
