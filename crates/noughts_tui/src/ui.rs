//! Rendering for the board, status, scores, and mode lines.

use noughts_core::{Mark, Outcome, Square, WinLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Draws one frame from the current session state.
pub fn draw(f: &mut Frame, app: &App) {
    let session = app.controller().session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(11),   // board
            Constraint::Length(1), // status
            Constraint::Length(1), // scores
            Constraint::Length(1), // mode
            Constraint::Length(1), // help
        ])
        .split(f.area());

    let title = Paragraph::new("noughts")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    render_board(f, rows[1], app);

    let status = Paragraph::new(session.status.as_str()).alignment(Alignment::Center);
    f.render_widget(status, rows[2]);

    let scores = Paragraph::new(format!(
        "X: {}   O: {}   Ties: {}",
        session.scores.x, session.scores.o, session.scores.ties
    ))
    .alignment(Alignment::Center);
    f.render_widget(scores, rows[3]);

    let mode = if session.ai_mode {
        "Mode: single player (O is automated)"
    } else {
        "Mode: two player"
    };
    f.render_widget(
        Paragraph::new(mode)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[4],
    );

    f.render_widget(
        Paragraph::new("1-9 or arrows+enter: play   m: mode   r: reset   q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[5],
    );
}

/// Renders the 3x3 grid with separators, the winning line highlighted, and
/// the cursor shown while a human move is expected.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, start) in [(0usize, 0usize), (2, 3), (4, 6)] {
        render_row(f, rows[i], app, start);
    }
    for i in [1, 3] {
        let sep = Paragraph::new("─".repeat(rows[i].width as usize))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(sep, rows[i]);
    }
}

fn render_row(f: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (i, offset) in [(0usize, 0usize), (2, 1), (4, 2)] {
        render_square(f, cols[i], app, start + offset);
    }
    for i in [1, 3] {
        let sep = Paragraph::new("│\n│\n│")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(sep, cols[i]);
    }
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: usize) {
    let session = app.controller().session();
    let square = session.game.board().get(pos).unwrap_or(Square::Empty);

    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(line) = winning_line(session.game.outcome())
        && line.contains(&pos)
    {
        style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }

    let human_to_move = session.game.is_active() && !session.automation_to_move();
    if human_to_move && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad to the middle line of the 3-line cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn winning_line(outcome: &Outcome) -> Option<WinLine> {
    match outcome {
        Outcome::Won { line, .. } => Some(*line),
        _ => None,
    }
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
