//! Rendering for the noughts TUI.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode, LOG_LINES, ManualField};

/// Draws the full frame: title, board, status area, and log panel.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(4),
            Constraint::Length(LOG_LINES as u16 + 2),
        ])
        .split(f.area());

    let title = Paragraph::new("noughts")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app);
    render_status(f, chunks[2], app);
    render_log(f, chunks[3], app);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(app.status().to_string())];
    match app.mode() {
        InputMode::Manual => lines.push(manual_form_line(app)),
        InputMode::Cursor => lines.push(Line::styled(
            "m manual entry   r restart   q quit",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let block = Block::default().borders(Borders::ALL).title(" status ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn manual_form_line(app: &App) -> Line<'_> {
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default();
    let (row_style, col_style) = match app.field() {
        ManualField::Row => (active, idle),
        ManualField::Col => (idle, active),
    };

    Line::from(vec![
        Span::raw("Row: "),
        Span::styled(format!("[{:<4}]", app.row_entry()), row_style),
        Span::raw("   Col: "),
        Span::styled(format!("[{:<4}]", app.col_entry()), col_style),
    ])
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .recent_logs()
        .iter()
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" validation log ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
