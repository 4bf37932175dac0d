//! Board and chrome rendering.

use crate::app::App;
use dots_and_boxes::{Board, Owner, Phase, Segment, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

/// Renders the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Dots and Boxes")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_scores(f, chunks[1], app);
    render_board(f, chunks[2], app);

    let status = Paragraph::new(app.status()).alignment(Alignment::Center);
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows: move  tab/o: flip  enter: draw  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

fn render_scores(f: &mut Frame, area: Rect, app: &App) {
    let scores = app.game().board().scores();
    let line = Line::from(vec![
        Span::styled(
            format!("Human: {}", scores.of(Side::Human)),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("AI: {}", scores.of(Side::Ai)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let cursor = (app.game().phase() == Phase::AwaitingPlayer)
        .then(|| app.cursor().segment());

    let mut lines = Vec::with_capacity(board.rows() * 2 + 1);
    for y in 0..=board.rows() {
        lines.push(dot_row(board, y, cursor));
        if y < board.rows() {
            lines.push(cell_row(board, y, cursor));
        }
    }

    let width = (board.cols() * 4 + 1) as u16;
    let height = (board.rows() * 2 + 1) as u16;
    let board_area = center_rect(area, width, height);
    f.render_widget(Paragraph::new(Text::from(lines)), board_area);
}

fn dot_row(board: &Board, y: usize, cursor: Option<Segment>) -> Line<'static> {
    let mut spans = Vec::with_capacity(board.cols() * 2 + 1);
    for x in 0..board.cols() {
        spans.push(dot());
        spans.push(segment_span(board, Segment::horizontal(x, y), cursor, "---"));
    }
    spans.push(dot());
    Line::from(spans)
}

fn cell_row(board: &Board, y: usize, cursor: Option<Segment>) -> Line<'static> {
    let mut spans = Vec::with_capacity(board.cols() * 2 + 1);
    for x in 0..=board.cols() {
        spans.push(segment_span(board, Segment::vertical(x, y), cursor, "|"));
        if x < board.cols() {
            let square = board.square_at(x, y).expect("cell is in range");
            let (mark, style) = match square.owner() {
                Owner::Unclaimed => (
                    square.value().to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Owner::Claimed(Side::Human) => (
                    "H".to_string(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Owner::Claimed(Side::Ai) => (
                    "A".to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(Span::styled(format!(" {mark} "), style));
        }
    }
    Line::from(spans)
}

fn dot() -> Span<'static> {
    Span::styled("*", Style::default().fg(Color::DarkGray))
}

fn segment_span(
    board: &Board,
    segment: Segment,
    cursor: Option<Segment>,
    glyph: &'static str,
) -> Span<'static> {
    let drawn = board.connected().contains(&segment);
    if cursor == Some(segment) {
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        return Span::styled(glyph, style);
    }
    if drawn {
        Span::styled(glyph, Style::default().fg(Color::White))
    } else {
        Span::raw(" ".repeat(glyph.len()))
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
