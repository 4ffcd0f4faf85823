//! Application state and logic.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use grid_tictactoe::{Coord, GameEngine, GameSnapshot, GameStatus};
use tracing::{debug, info};

use super::input::{self, Action};
use super::ui::layout::BoardLayout;

/// Main application state.
///
/// Owns the engine for the current size. Changing the size drops the
/// engine and starts a new one.
pub struct App {
    engine: GameEngine,
    snapshot: GameSnapshot,
    max_size: usize,
    cursor: Coord,
    layout: Option<BoardLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh board.
    pub fn new(size: usize, max_size: usize) -> Self {
        let size = size.min(max_size);
        let engine = GameEngine::new(size);
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            max_size,
            cursor: Coord::new(0, 0),
            layout: None,
            should_quit: false,
        }
    }

    /// Latest snapshot of the game.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Current board size.
    pub fn size(&self) -> usize {
        self.engine.size()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: Option<BoardLayout>) {
        self.layout = layout;
    }

    /// Status line text for the current snapshot.
    pub fn status_message(&self) -> String {
        match self.snapshot.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.snapshot.current_mark()),
            GameStatus::WonBy(mark) => format!("{} wins!", mark),
            GameStatus::Tie => "Tie!".to_string(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Reset => self.reset(),
            Action::Grow => self.resize(self.size().saturating_add(1)),
            Action::Shrink => self.resize(self.size().saturating_sub(1)),
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key, self.size());
            }
        }
    }

    /// Handles a mouse event; a left click plays the cell under it.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(coord) = self
            .layout
            .and_then(|layout| layout.cell_at(event.column, event.row))
        else {
            return;
        };
        self.cursor = coord;
        self.play(coord);
    }

    /// Plays a cell and refreshes the snapshot.
    ///
    /// Finished games and occupied cells are skipped here; the engine still
    /// rejects anything invalid that gets through.
    pub fn play(&mut self, coord: Coord) {
        if !self.snapshot.is_playing() || !self.snapshot.board().is_empty(coord) {
            return;
        }
        if let Err(e) = self.engine.play_at(coord) {
            debug!(%coord, error = %e, "Move ignored");
        }
        self.refresh();
    }

    /// Restarts the game at the same size.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.refresh();
    }

    /// Replaces the engine with one of a new size, clamped to the configured
    /// maximum.
    pub fn resize(&mut self, size: usize) {
        let size = size.min(self.max_size);
        if size == self.size() {
            return;
        }
        info!(size, "Changing board size");
        self.engine = GameEngine::new(size);
        self.cursor = input::clamp(self.cursor, size.saturating_sub(1));
        self.layout = None;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.snapshot = self.engine.snapshot();
    }
}
