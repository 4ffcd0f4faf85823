//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use grid_tictactoe::Coord;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Restart at the same size.
    Reset,
    /// Increase the board size by one.
    Grow,
    /// Decrease the board size by one.
    Shrink,
    /// Place a mark under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Grow),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Shrink),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        _ => None,
    }
}

/// Moves the cursor one cell, staying inside an N×N board.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    let moved = match key {
        KeyCode::Up => Coord::new(cursor.row.saturating_sub(1), cursor.column),
        KeyCode::Down => Coord::new(cursor.row + 1, cursor.column),
        KeyCode::Left => Coord::new(cursor.row, cursor.column.saturating_sub(1)),
        KeyCode::Right => Coord::new(cursor.row, cursor.column + 1),
        _ => cursor,
    };
    clamp(moved, last)
}

/// Pulls a coordinate back onto the board after a size change.
pub fn clamp(coord: Coord, last: usize) -> Coord {
    Coord::new(coord.row.min(last), coord.column.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_on_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right, 3), Coord::new(0, 1));

        let far = Coord::new(4, 4);
        assert_eq!(move_cursor(far, KeyCode::Down, 5), far);
        assert_eq!(move_cursor(far, KeyCode::Right, 5), far);
        assert_eq!(move_cursor(far, KeyCode::Up, 5), Coord::new(3, 4));
    }

    #[test]
    fn test_cursor_on_empty_board() {
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Down, 0), Coord::new(0, 0));
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('+')), Some(Action::Grow));
        assert_eq!(action_for(KeyCode::Char('-')), Some(Action::Shrink));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlayCursor));
        assert_eq!(
            action_for(KeyCode::Left),
            Some(Action::MoveCursor(KeyCode::Left))
        );
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }
}
