use std::time::Instant;

use crate::game::Button;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::screen::Screen;

/// Base and lit colours for each pad.
fn pad_colors(button: Button) -> (Color, Color) {
    match button {
        Button::Green => (Color::Green, Color::LightGreen),
        Button::Red => (Color::Red, Color::LightRed),
        Button::Yellow => (Color::Yellow, Color::LightYellow),
        Button::Blue => (Color::Blue, Color::LightBlue),
    }
}

/// Render the four pads as a 2x2 grid into the given area.
pub fn render_pad(frame: &mut Frame, screen: &Screen, area: Rect) {
    let now = Instant::now();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row, chunk) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*chunk);
        for (col, cell) in cols.iter().enumerate() {
            let button = Button::ALL[row * 2 + col];
            render_button(frame, button, screen.is_lit(button, now), screen.interactive(), *cell);
        }
    }
}

fn render_button(frame: &mut Frame, button: Button, lit: bool, interactive: bool, area: Rect) {
    let (base, bright) = pad_colors(button);

    let (block_style, border_type) = if lit {
        (Style::default().bg(bright).fg(Color::Black), BorderType::Thick)
    } else if interactive {
        (Style::default().fg(base), BorderType::Rounded)
    } else {
        (Style::default().fg(Color::DarkGray), BorderType::Rounded)
    };

    let label = Line::from(format!("{}  {}", button.index() + 1, button.name()));
    let label_style = if lit {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(base)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .style(block_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Centre the label vertically.
    let label_area = Rect {
        y: inner.y + inner.height / 2,
        height: inner.height.min(1),
        ..inner
    };
    let widget = Paragraph::new(label)
        .style(label_style)
        .alignment(Alignment::Center);
    frame.render_widget(widget, label_area);
}
