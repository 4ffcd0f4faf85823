//! Stateless UI rendering.

mod board;
pub mod layout;

use grid_tictactoe::{GameStatus, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use layout::BoardLayout;

/// Draws the whole screen and returns the board layout for hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> Option<BoardLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Size selector
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Grid Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let selector = Paragraph::new(format!("[-]  {}x{}  [+]", app.size(), app.size()))
        .alignment(Alignment::Center);
    frame.render_widget(selector, chunks[1]);

    let layout = board::render_board(frame, chunks[2], app.snapshot(), app.cursor());

    let status_color = match app.snapshot().status() {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::WonBy(Mark::X) => Color::Red,
        GameStatus::WonBy(Mark::O) | GameStatus::Tie => Color::Blue,
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows move  enter/click play  +/- size  r reset  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    layout
}
