//! Variable-size tic-tac-toe game engine.
//!
//! An N×N board where X and O alternate until one of them fills a full row,
//! column or diagonal, or the board fills up with no line.
//!
//! # Example
//!
//! ```
//! use grid_tictactoe::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new(3);
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     let _ = engine.play(row, column);
//! }
//! assert_eq!(engine.snapshot().status(), &GameStatus::WonBy(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod lines;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use board::{Board, MAX_BOARD_SIZE};
pub use engine::GameEngine;
pub use error::MoveError;
pub use lines::{Line, LineKind, enumerate_lines};
pub use rules::WinnerLine;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Cell, Coord, GameStatus, Mark};
