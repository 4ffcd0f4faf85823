//! Command-line interface.

use crate::replay::MoveArg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Variable-size tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "grid_tictactoe")]
#[command(about = "Variable-size tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Starting board size (defaults to the config value)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "grid_tictactoe.toml")]
        config: PathBuf,
    },

    /// Apply a list of moves and print the resulting game state as JSON
    Replay {
        /// Board size
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "grid_tictactoe.toml")]
        config: PathBuf,

        /// Moves as `row,col`, applied in order starting with X
        #[arg(allow_hyphen_values = true)]
        moves: Vec<MoveArg>,
    },
}
