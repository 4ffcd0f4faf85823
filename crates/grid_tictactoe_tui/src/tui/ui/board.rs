//! N×N board rendering.

use grid_tictactoe::{Cell, Coord, GameSnapshot, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::BoardLayout;

/// Renders the board and returns where its cells were drawn.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Coord,
) -> Option<BoardLayout> {
    let size = snapshot.size();
    let Some(layout) = BoardLayout::compute(area, size) else {
        let hint = if size == 0 {
            "Empty board. Press + to grow it."
        } else {
            "Terminal too small for this board."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return None;
    };

    for row in 0..size {
        for column in 0..size {
            let coord = Coord::new(row, column);
            render_cell(f, &layout, snapshot, coord, coord == cursor);
        }
    }

    Some(layout)
}

fn render_cell(
    f: &mut Frame,
    layout: &BoardLayout,
    snapshot: &GameSnapshot,
    coord: Coord,
    under_cursor: bool,
) {
    let cell = snapshot.board().get(coord).unwrap_or_default();
    let (symbol, mut style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = snapshot
        .winner_line()
        .as_ref()
        .is_some_and(|line| line.contains(coord, snapshot.size()));
    if on_winning_line {
        style = style.bg(Color::Green);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let mut paragraph = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center);
    if layout.bordered() {
        let border = if under_cursor { Color::White } else { Color::DarkGray };
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    }

    f.render_widget(paragraph, layout.cell_rect(coord));
}
