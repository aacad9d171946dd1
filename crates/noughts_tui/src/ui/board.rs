//! Board grid rendering.

use noughts_core::{Board, Cell, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::app::{App, InputMode};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the board grid with the cursor highlight.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let size = board.size() as u16;
    if size == 0 {
        return;
    }

    let width = size * (CELL_WIDTH + 1) - 1;
    let height = size * (CELL_HEIGHT + 1) - 1;
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(size, CELL_HEIGHT))
        .split(board_area);

    for row in 0..board.size() {
        let idx = row * 2;
        if row > 0 {
            render_h_separator(f, rows[idx - 1]);
        }
        render_row(f, rows[idx], app, board, row);
    }
}

/// Alternating cell/separator constraints along one axis.
fn grid_constraints(size: u16, cell: u16) -> Vec<Constraint> {
    let mut constraints = Vec::new();
    for i in 0..size {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(cell));
    }
    constraints
}

fn render_row(f: &mut Frame, area: Rect, app: &App, board: &Board, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(grid_constraints(board.size() as u16, CELL_WIDTH))
        .split(area);

    for col in 0..board.size() {
        let idx = col * 2;
        if col > 0 {
            render_v_separator(f, cols[idx - 1]);
        }
        render_cell(f, cols[idx], app, board, row, col);
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, board: &Board, row: usize, col: usize) {
    let (text, mut style) = match board.get(row, col) {
        Some(Cell::Occupied(Player::X)) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Player::O)) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => ("·", Style::default().fg(Color::DarkGray)),
    };

    if app.mode() == InputMode::Cursor && app.cursor() == (row, col) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad one blank line so the mark sits near the cell's vertical center.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_h_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_v_separator(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
