//! Cell geometry for an N×N board inside a terminal area.

use grid_tictactoe::Coord;
use ratatui::layout::Rect;

/// Widest a cell is drawn, in columns.
pub const CELL_WIDTH: u16 = 7;
/// Tallest a cell is drawn, in rows.
pub const CELL_HEIGHT: u16 = 3;

/// Where each cell of the board lands on screen.
///
/// Computed from the frame area at draw time and kept by the app so mouse
/// clicks can be mapped back to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    size: u16,
    cell_width: u16,
    cell_height: u16,
}

impl BoardLayout {
    /// Fits an N×N grid centered in `area`, shrinking cells when needed.
    ///
    /// Returns `None` for an empty board or an area too small for one
    /// column and one row per cell.
    pub fn compute(area: Rect, size: usize) -> Option<Self> {
        let n = u16::try_from(size).ok().filter(|n| *n > 0)?;
        let cell_width = CELL_WIDTH.min(area.width / n);
        let cell_height = CELL_HEIGHT.min(area.height / n);
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        let total_width = cell_width * n;
        let total_height = cell_height * n;
        Some(Self {
            origin_x: area.x + (area.width - total_width) / 2,
            origin_y: area.y + (area.height - total_height) / 2,
            size: n,
            cell_width,
            cell_height,
        })
    }

    /// Screen rectangle of a cell.
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        Rect::new(
            self.origin_x + coord.column as u16 * self.cell_width,
            self.origin_y + coord.row as u16 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Cell under a terminal position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let dx = column.checked_sub(self.origin_x)? / self.cell_width;
        let dy = row.checked_sub(self.origin_y)? / self.cell_height;
        (dx < self.size && dy < self.size).then(|| Coord::new(dy as usize, dx as usize))
    }

    /// Whether cells are big enough to draw borders.
    pub fn bordered(&self) -> bool {
        self.cell_width >= 3 && self.cell_height >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_full_size_cells() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 41, 19), 3).unwrap();
        // 3 cells of 7x3 -> 21x9, centered in 41x19.
        assert_eq!(layout.cell_rect(Coord::new(0, 0)), Rect::new(10, 5, 7, 3));
        assert_eq!(layout.cell_rect(Coord::new(2, 1)), Rect::new(17, 11, 7, 3));
        assert!(layout.bordered());
    }

    #[test]
    fn test_hit_testing() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 41, 19), 3).unwrap();
        assert_eq!(layout.cell_at(10, 5), Some(Coord::new(0, 0)));
        assert_eq!(layout.cell_at(16, 7), Some(Coord::new(0, 0)));
        assert_eq!(layout.cell_at(17, 8), Some(Coord::new(1, 1)));
        assert_eq!(layout.cell_at(30, 13), Some(Coord::new(2, 2)));
        assert_eq!(layout.cell_at(9, 5), None);
        assert_eq!(layout.cell_at(31, 5), None);
        assert_eq!(layout.cell_at(10, 14), None);
    }

    #[test]
    fn test_cells_shrink_to_fit() {
        let layout = BoardLayout::compute(Rect::new(2, 1, 20, 10), 9).unwrap();
        assert_eq!(layout.cell_rect(Coord::new(0, 0)).width, 2);
        assert_eq!(layout.cell_rect(Coord::new(0, 0)).height, 1);
        assert!(!layout.bordered());
        assert_eq!(layout.cell_at(2, 1), None);
    }

    #[test]
    fn test_empty_or_tiny() {
        assert_eq!(BoardLayout::compute(Rect::new(0, 0, 40, 20), 0), None);
        assert_eq!(BoardLayout::compute(Rect::new(0, 0, 4, 4), 5), None);
    }
}
