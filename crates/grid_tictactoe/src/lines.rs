//! Enumeration of the lines checked for a win.

use super::board::Board;
use super::types::{Cell, Coord};
use serde::{Deserialize, Serialize};

/// Which full line of the board a [`Line`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
    /// A full row.
    Row(usize),
    /// A full column.
    Column(usize),
}

impl LineKind {
    /// Returns true if the coordinate lies on this line of an N×N board.
    pub fn contains(self, coord: Coord, size: usize) -> bool {
        if coord.row >= size || coord.column >= size {
            return false;
        }
        match self {
            LineKind::MainDiagonal => coord.row == coord.column,
            LineKind::AntiDiagonal => coord.row + coord.column == size - 1,
            LineKind::Row(row) => coord.row == row,
            LineKind::Column(column) => coord.column == column,
        }
    }
}

/// The ordered coordinates of one full line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Which line this is.
    pub kind: LineKind,
    /// Coordinates in scan order.
    pub coords: Vec<Coord>,
}

impl Line {
    /// Reads the cells of this line from the board.
    pub fn cells<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Cell> + 'a {
        self.coords.iter().filter_map(|c| board.get(*c))
    }
}

/// Lists every line of the board: main diagonal, anti-diagonal, rows
/// top-to-bottom, then columns left-to-right.
///
/// An N×N board yields 2N+2 lines. For N=0 both diagonals are empty.
pub fn enumerate_lines(board: &Board) -> Vec<Line> {
    let n = board.size();
    let mut lines = Vec::with_capacity(2 * n + 2);

    lines.push(Line {
        kind: LineKind::MainDiagonal,
        coords: (0..n).map(|i| Coord::new(i, i)).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        coords: (0..n).map(|i| Coord::new(i, n - 1 - i)).collect(),
    });
    for row in 0..n {
        lines.push(Line {
            kind: LineKind::Row(row),
            coords: (0..n).map(|column| Coord::new(row, column)).collect(),
        });
    }
    for column in 0..n {
        lines.push(Line {
            kind: LineKind::Column(column),
            coords: (0..n).map(|row| Coord::new(row, column)).collect(),
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        for n in 0..6 {
            assert_eq!(enumerate_lines(&Board::new(n)).len(), 2 * n + 2);
        }
    }

    #[test]
    fn test_scan_order_3x3() {
        let lines = enumerate_lines(&Board::new(3));
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
            ]
        );
        assert_eq!(
            lines[1].coords,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
        assert_eq!(
            lines[5].coords,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_every_line_has_n_cells() {
        let lines = enumerate_lines(&Board::new(5));
        assert!(lines.iter().all(|l| l.coords.len() == 5));
    }

    #[test]
    fn test_zero_size_lines_are_empty() {
        let lines = enumerate_lines(&Board::new(0));
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.coords.is_empty()));
    }

    #[test]
    fn test_kind_contains() {
        assert!(LineKind::AntiDiagonal.contains(Coord::new(1, 2), 4));
        assert!(!LineKind::AntiDiagonal.contains(Coord::new(1, 1), 4));
        assert!(LineKind::Column(2).contains(Coord::new(3, 2), 4));
        assert!(!LineKind::Row(0).contains(Coord::new(0, 4), 4));
        assert!(!LineKind::MainDiagonal.contains(Coord::new(0, 0), 0));
    }
}
