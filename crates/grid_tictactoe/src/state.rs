//! The engine's mutable aggregate.

use super::board::Board;
use super::error::MoveError;
use super::rules;
use super::types::{Coord, GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// Board, turn and status of one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty N×N board, X to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark placed by the next accepted move. After a terminal move this
    /// stays on the mark that made it.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks a move without applying it.
    pub fn validate(&self, coord: Coord) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(coord) {
            return Err(MoveError::OutOfBounds {
                row: i64::try_from(coord.row).unwrap_or(i64::MAX),
                column: i64::try_from(coord.column).unwrap_or(i64::MAX),
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }
        Ok(())
    }

    /// Places the current mark and settles the resulting status.
    ///
    /// Validation runs before any mutation, so an `Err` leaves `self`
    /// untouched. The mark is not flipped on a win or a tie.
    pub fn place(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        self.validate(coord)?;

        self.board.set(coord, self.current_mark);

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::WonBy(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Tie;
        } else {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.status)
    }
}
