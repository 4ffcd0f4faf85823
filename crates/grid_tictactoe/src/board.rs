//! Square N×N board storage.

use super::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};

/// Largest supported board dimension. Larger requests are clamped to it so
/// the cell count always fits in memory and never overflows `usize`.
pub const MAX_BOARD_SIZE: usize = 1024;

/// N×N tic-tac-toe board.
///
/// Cells are stored row-major, so `cells.len() == size * size` always holds
/// and every row has exactly `size` columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension, at most
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.column < self.size)
            .then(|| coord.row * self.size + coord.column)
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Gets the cell at the coordinate, or `None` outside the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Checks if the cell at the coordinate is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Places a mark. Returns false when the coordinate is off the board.
    pub(crate) fn set(&mut self, coord: Coord, mark: Mark) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = Cell::Occupied(mark);
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size; a 0×0 board has no rows.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Mark::X) => "X",
                    Cell::Occupied(Mark::O) => "O",
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
