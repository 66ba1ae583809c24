//! Core domain for syncdash: bounded log views, error summaries and sync
//! status classification for the rsync backup dashboard.
//!
//! This crate has no HTTP or process-management code. Adapters
//! (`syncdash-axum`, `syncdash-runtime`) depend on it, never the reverse.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod logs;
pub mod paths;
pub mod ports;

pub use config::{
    ConfigError, DEFAULT_FALLBACK_PORT, DEFAULT_MAX_LINES, DEFAULT_MAX_LOG_BYTES, DEFAULT_PORT,
    DashboardConfig,
};
pub use logs::{
    ErrorEntry, ErrorSummary, LogLimits, LogView, SyncStatus, classify, read_bounded, reset_log,
    summarize,
};
pub use paths::{PathError, ensure_parent_dir};
pub use ports::{JobCommand, JobLauncher, LaunchError, LaunchedJob};
