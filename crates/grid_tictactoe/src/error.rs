//! Move rejection reasons.

use super::types::Coord;

/// Why a move was not applied.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a win or a tie.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate lies outside the board.
    #[display("({}, {}) is outside the {}x{} board", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        column: i64,
        /// Board dimension.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),
}

impl std::error::Error for MoveError {}
