//! Non-interactive replay of a move list.

use crate::config::TuiConfig;
use anyhow::Result;
use derive_more::{Display, Error};
use grid_tictactoe::{GameEngine, GameSnapshot};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// One `row,col` move from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveArg {
    /// Row index (may be negative; the engine rejects it).
    pub row: i64,
    /// Column index (may be negative; the engine rejects it).
    pub column: i64,
}

impl MoveArg {
    /// Creates a move argument.
    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

/// A move argument that is not two comma-separated integers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}', expected row,col", input)]
pub struct ParseMoveError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for MoveArg {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };
        let (row, column) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let column = column.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, column))
    }
}

/// Outcome of replaying a move list.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Moves the engine applied.
    pub accepted: usize,
    /// Moves the engine rejected.
    pub rejected: usize,
    /// Final game state.
    pub snapshot: GameSnapshot,
}

/// Applies the moves to a fresh engine of the given size.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(size: usize, moves: &[MoveArg]) -> ReplayReport {
    let mut engine = GameEngine::new(size);
    let mut accepted = 0;
    let mut rejected = 0;

    for mv in moves {
        match engine.play(mv.row, mv.column) {
            Ok(_) => accepted += 1,
            Err(e) => {
                warn!(row = mv.row, column = mv.column, error = %e, "Move ignored");
                rejected += 1;
            }
        }
    }

    info!(accepted, rejected, "Replay finished");
    ReplayReport {
        accepted,
        rejected,
        snapshot: engine.snapshot(),
    }
}

/// Replays the moves and prints the board followed by the JSON report.
///
/// The requested size is clamped to the configured maximum, as in `play`.
pub fn run(
    config: &TuiConfig,
    size: usize,
    moves: &[MoveArg],
    out: &mut impl Write,
) -> Result<()> {
    let report = replay(config.starting_size(Some(size)), moves);
    writeln!(out, "{}", report.snapshot.board())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
