//! Game engine owning exactly one game.

use super::error::MoveError;
use super::snapshot::GameSnapshot;
use super::state::GameState;
use super::types::{Coord, GameStatus};
use super::board::MAX_BOARD_SIZE;
use tracing::{debug, info, instrument, warn};

/// Variable-size tic-tac-toe engine.
///
/// Owns a single [`GameState`] and enforces the rules. Not meant for
/// concurrent use; the owner serializes access.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with an empty `size`×`size` board, X to move.
    ///
    /// Sizes above [`MAX_BOARD_SIZE`] are clamped to it.
    #[instrument]
    pub fn new(size: usize) -> Self {
        if size > MAX_BOARD_SIZE {
            warn!(size, max = MAX_BOARD_SIZE, "Board size clamped");
        }
        debug!(size, "Creating board");
        Self {
            state: GameState::new(size),
        }
    }

    /// Board dimension. Fixed for the lifetime of the engine.
    pub fn size(&self) -> usize {
        self.state.board().size()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot with the derived winner.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state)
    }

    /// Attempts a move at signed coordinates.
    ///
    /// Negative or oversized coordinates are rejected as out of bounds.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the state is unchanged in that case.
    #[instrument(skip(self), fields(mark = %self.state.current_mark()))]
    pub fn play(&mut self, row: i64, column: i64) -> Result<GameStatus, MoveError> {
        let coord = match (usize::try_from(row), usize::try_from(column)) {
            (Ok(r), Ok(c)) => Coord::new(r, c),
            _ => {
                let err = if self.state.status().is_terminal() {
                    MoveError::GameOver
                } else {
                    MoveError::OutOfBounds {
                        row,
                        column,
                        size: self.size(),
                    }
                };
                debug!(error = %err, "Move rejected");
                return Err(err);
            }
        };
        self.play_at(coord)
    }

    /// Attempts a move at an unsigned coordinate.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the state is unchanged in that case.
    #[instrument(skip(self), fields(mark = %self.state.current_mark()))]
    pub fn play_at(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        let mark = self.state.current_mark();
        match self.state.place(coord) {
            Ok(status) => {
                debug!(%coord, %mark, ?status, "Move applied");
                if status.is_terminal() {
                    info!(?status, "Game over");
                }
                Ok(status)
            }
            Err(err) => {
                debug!(%coord, error = %err, "Move rejected");
                Err(err)
            }
        }
    }

    /// Starts over on an empty board of the same dimension.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new(self.size());
    }
}
