//! Win detection by full-line scan.

use super::super::board::Board;
use super::super::lines::{LineKind, enumerate_lines};
use super::super::types::{Cell, Coord, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The winning mark and the endpoints of its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinnerLine {
    /// Mark that filled the line.
    mark: Mark,
    /// Which line was filled.
    kind: LineKind,
    /// First coordinate in scan order.
    start: Coord,
    /// Last coordinate in scan order.
    end: Coord,
}

impl WinnerLine {
    /// Returns true if the coordinate is part of the winning line.
    pub fn contains(&self, coord: Coord, size: usize) -> bool {
        self.kind.contains(coord, size)
    }
}

/// Finds the first winning line.
///
/// A line wins when its first cell holds a mark and every other cell equals
/// it. Lines are scanned diagonals first, then rows, then columns.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<WinnerLine> {
    for line in enumerate_lines(board) {
        let (Some(&start), Some(&end)) = (line.coords.first(), line.coords.last()) else {
            continue;
        };
        let Some(Cell::Occupied(mark)) = board.get(start) else {
            continue;
        };
        if line.cells(board).all(|cell| cell == Cell::Occupied(mark)) {
            return Some(WinnerLine {
                mark,
                kind: line.kind,
                start,
                end,
            });
        }
    }

    None
}

/// Returns the winning mark, if any line is complete.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, mark: Mark, coords: &[(usize, usize)]) {
        for &(r, c) in coords {
            board.set(Coord::new(r, c), mark);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3);
        place(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        let line = winning_line(&board).unwrap();
        assert_eq!(*line.mark(), Mark::X);
        assert_eq!(*line.kind(), LineKind::Row(0));
        assert_eq!(*line.start(), Coord::new(0, 0));
        assert_eq!(*line.end(), Coord::new(0, 2));
    }

    #[test]
    fn test_winner_anti_diagonal_4x4() {
        let mut board = Board::new(4);
        place(&mut board, Mark::O, &[(0, 3), (1, 2), (2, 1), (3, 0)]);
        let line = winning_line(&board).unwrap();
        assert_eq!(*line.kind(), LineKind::AntiDiagonal);
        assert_eq!(*line.start(), Coord::new(0, 3));
        assert_eq!(*line.end(), Coord::new(3, 0));
        assert!(line.contains(Coord::new(2, 1), 4));
        assert!(!line.contains(Coord::new(2, 2), 4));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new(3);
        place(&mut board, Mark::O, &[(0, 2), (1, 2), (2, 2)]);
        assert_eq!(winning_line(&board).map(|l| *l.kind()), Some(LineKind::Column(2)));
    }

    #[test]
    fn test_diagonal_found_before_row() {
        let mut board = Board::new(3);
        place(&mut board, Mark::X, &[(0, 0), (1, 1), (2, 2), (2, 0), (2, 1)]);
        assert_eq!(
            winning_line(&board).map(|l| *l.kind()),
            Some(LineKind::MainDiagonal)
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3);
        place(&mut board, Mark::X, &[(0, 0), (0, 1)]);
        place(&mut board, Mark::O, &[(0, 2)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        assert_eq!(check_winner(&board), None);
        place(&mut board, Mark::O, &[(0, 0)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_zero_size_has_no_winner() {
        assert_eq!(winning_line(&Board::new(0)), None);
    }
}
