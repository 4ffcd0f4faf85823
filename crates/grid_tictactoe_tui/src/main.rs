//! Grid Tic-Tac-Toe - terminal front end.
//!
//! Interactive N×N tic-tac-toe with a size selector, plus a `replay`
//! command that prints the outcome of a move list as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, config } => run_play(size, &config),
        Command::Replay {
            size,
            config,
            moves,
        } => {
            initialize_stderr_tracing();
            let config = TuiConfig::load_or_default(&config)?;
            replay::run(&config, size, &moves, &mut std::io::stdout().lock())
        }
    }
}

/// Loads config, then runs the terminal UI with logs sent to a file.
fn run_play(size: Option<usize>, config_path: &Path) -> Result<()> {
    let config = TuiConfig::load_or_default(config_path)?;
    initialize_file_tracing(config.log_file())?;
    start(&config, size)
}

#[instrument(skip(config))]
fn start(config: &TuiConfig, size: Option<usize>) -> Result<()> {
    let size = config.starting_size(size);
    info!(size, max_size = *config.max_size(), "Starting game");
    tui::run_tui(tui::App::new(size, *config.max_size()))
}

/// Sends logs to a file so they do not interfere with the terminal UI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,grid_tictactoe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
