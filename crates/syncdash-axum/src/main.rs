//! `syncdash` entry point - loads configuration, installs tracing and runs
//! the web server.

use clap::Parser;
use syncdash_axum::{Cli, init_tracing, start_server};
use syncdash_core::{DashboardConfig, ensure_parent_dir};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = DashboardConfig::from_env()?;
    cli.apply_to(&mut config);
    config.validate()?;

    ensure_parent_dir(&config.server_log)?;
    let _guard = init_tracing(&config.server_log)?;

    if let Err(e) = start_server(config).await {
        tracing::error!("Failed to start web server: {:#}", e);
        return Err(e);
    }
    Ok(())
}
