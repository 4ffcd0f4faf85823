//! Game rules for variable-size tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept separate from the
//! engine so they can be tested without any move sequencing.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WinnerLine, check_winner, winning_line};
