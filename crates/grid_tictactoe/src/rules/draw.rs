//! Tie detection.

use super::super::board::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if no empty cell remains.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

/// A tie is a full board with no winning line.
///
/// A full board that also completes a line is a win, never a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
