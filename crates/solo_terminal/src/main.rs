//! Solo tic-tac-toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use solo_terminal::{Cli, GameConfig, run_tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_tracing(&config)?;
    info!(
        random_move_probability = config.random_move_probability(),
        turn_delay_ms = config.turn_delay_ms(),
        thinking_delay_ms = config.thinking_delay_ms(),
        seed = ?config.seed(),
        "Starting solo tic-tac-toe"
    );

    run_tui(&config).await
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
