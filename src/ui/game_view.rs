use crate::game::StatusTone;
use crate::scores::ScoreEntry;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::pad_widget;
use super::screen::{NamePrompt, Screen};

pub fn render(frame: &mut Frame, screen: &Screen, scores: &[ScoreEntry]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Pad + scores
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, screen, chunks[0]);

    let main_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);
    pad_widget::render_pad(frame, screen, main_cols[0]);
    render_scores(frame, scores, main_cols[1]);

    render_status(frame, screen, chunks[2]);
    render_controls(frame, screen, chunks[3]);

    if let Some(prompt) = screen.prompt() {
        render_prompt(frame, prompt);
    }
}

fn render_header(frame: &mut Frame, screen: &Screen, area: Rect) {
    let level = match screen.level() {
        Some(level) => format!("Level {}", level),
        None => "Press Enter to start".to_string(),
    };

    let header = Paragraph::new(level)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Follow Me"));

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, scores: &[ScoreEntry], area: Rect) {
    let mut lines = Vec::new();
    if scores.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (rank, entry) in scores.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", rank + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:<16}", entry.name)),
            Span::styled(
                format!("{:>4}", entry.score),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let table = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("High Scores"),
    );
    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, screen: &Screen, area: Rect) {
    let (text, color) = match (screen.notice(), screen.status()) {
        (Some(notice), _) => (notice.to_string(), Color::Magenta),
        (None, Some((message, tone))) => (message.to_string(), tone_color(tone)),
        (None, None) => (String::new(), Color::White),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Alert => Color::LightRed,
        StatusTone::Go => Color::Green,
        StatusTone::Neutral => Color::White,
    }
}

fn render_controls(frame: &mut Frame, screen: &Screen, area: Rect) {
    let start_style = if screen.start_enabled() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("Enter: Start", start_style),
        Span::raw("  |  1-4: Press pad  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_prompt(frame: &mut Frame, prompt: &NamePrompt) {
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Top score: {}! Enter your name", prompt.score)),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(
                format!("{}_", prompt.input),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Enter: Save score  |  Esc: Skip",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game Over")
            .style(Style::default().fg(Color::White)),
    );
    frame.render_widget(popup, area);
}

/// Fixed-size rectangle centred in `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
