//! Value snapshot handed to the view.

use super::board::Board;
use super::rules::{self, WinnerLine};
use super::state::GameState;
use super::types::{GameStatus, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Owned copy of the game state plus the derived winner.
///
/// Nothing in a snapshot is shared with the engine, so callers may keep or
/// mutate it freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Copy of the board.
    board: Board,
    /// Mark to move, or the mark that ended the game.
    current_mark: Mark,
    /// Game status.
    status: GameStatus,
    /// Winner recomputed from the board.
    winner: Option<Mark>,
    /// Winning line recomputed from the board, for highlighting.
    winner_line: Option<WinnerLine>,
}

impl GameSnapshot {
    /// Takes a snapshot of the state. The winner is recomputed, not cached.
    pub fn of(state: &GameState) -> Self {
        let winner_line = rules::winning_line(state.board());
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
            status: state.status(),
            winner: winner_line.map(|line| *line.mark()),
            winner_line,
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// True when moves are still accepted.
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::InProgress
    }
}
