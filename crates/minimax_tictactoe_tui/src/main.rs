//! Minimax Tic-Tac-Toe - terminal UI and headless tools
//!
//! Play against a computer that searches the whole game tree, or ask the
//! same search to solve a position.

#![warn(missing_docs)]

mod cli;
mod config;
mod headless;
mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{AppConfig, LogConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { name, delay_ms } => {
            init_file_logging(config.log())?;
            let config = config.with_delay_override(delay_ms);
            info!(config = %cli.config.display(), "Starting Minimax Tic-Tac-Toe");
            tui::run_tui(config.game(), name).await
        }
        Command::Solve { board, mark, json } => {
            init_stderr_logging(config.log());
            let report = headless::solve_report(&board, mark)?;
            headless::print_solve(&report, json)
        }
        Command::Selfplay { json } => {
            init_stderr_logging(config.log());
            let report = headless::selfplay_report();
            headless::print_selfplay(&report, json)
        }
    }
}

fn env_filter(log: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter()))
}

/// Logs to a file, since the terminal belongs to the UI.
fn init_file_logging(log: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(log.file())
        .with_context(|| format!("Failed to create log file {}", log.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(log: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log))
        .with_writer(std::io::stderr)
        .try_init();
}
