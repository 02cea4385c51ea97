use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, AppState};
use crate::confetti;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

const CONFETTI_COLORS: [Color; confetti::COLORS] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Playing => render_playing(self, area, buf),
            AppState::Summary => render_summary(self, area, buf),
        }
    }
}

fn render_playing(app: &App, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let dim_italic = Style::default()
        .patch(dim)
        .add_modifier(Modifier::ITALIC);
    let red_bold = Style::default().patch(bold).fg(Color::Red);

    let session = &app.session;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(1), // status
            Constraint::Length(1),
            Constraint::Length(1), // scramble
            Constraint::Length(1),
            Constraint::Length(1), // guess
            Constraint::Length(1), // feedback
            Constraint::Min(1),    // bottom padding
            Constraint::Length(1), // legend
        ])
        .split(area);

    let round_label = if session.on_last_round() {
        format!("final round {}/{}", session.round_count(), session.max_rounds())
    } else {
        format!("round {}/{}", session.round_count(), session.max_rounds())
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(round_label, dim),
        Span::raw("   "),
        Span::styled(format!("score {}", session.score()), dim),
    ]))
    .alignment(Alignment::Center);
    status.render(chunks[1], buf);

    // Letter-spaced scramble; fall back to the tight form on narrow terminals
    let spaced: String = session
        .current_scramble()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let max_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2) as usize;
    let scramble_text = if spaced.width() <= max_width {
        spaced
    } else {
        session.current_scramble().to_string()
    };
    let scramble = Paragraph::new(Span::styled(scramble_text, bold))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    scramble.render(chunks[3], buf);

    let guess = Paragraph::new(Line::from(vec![
        Span::styled("guess: ", dim),
        Span::styled(app.guess.clone(), bold),
        Span::styled("_", dim),
    ]))
    .alignment(Alignment::Center);
    guess.render(chunks[5], buf);

    if app.wrong_guess {
        let feedback = Paragraph::new(Span::styled("not quite, try again", red_bold))
            .alignment(Alignment::Center);
        feedback.render(chunks[6], buf);
    }

    let legend = Paragraph::new(Span::styled(
        "(enter)submit (tab)skip (esc)ape",
        dim_italic,
    ))
    .alignment(Alignment::Center);
    legend.render(chunks[8], buf);
}

fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let dim_italic = Style::default()
        .patch(dim)
        .add_modifier(Modifier::ITALIC);
    let magenta_bold = Style::default().patch(bold).fg(Color::Magenta);

    let session = &app.session;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(1), // headline
            Constraint::Length(1),
            Constraint::Length(1), // score
            Constraint::Length(1), // last word
            Constraint::Min(1),    // bottom padding
            Constraint::Length(1), // legend
        ])
        .split(area);

    let headline = if app.is_perfect() {
        Paragraph::new(Span::styled("PERFECT GAME", magenta_bold))
    } else {
        Paragraph::new(Span::styled("game over", bold))
    };
    headline
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let score = Paragraph::new(Span::styled(
        format!("final score: {}", session.score()),
        bold,
    ))
    .alignment(Alignment::Center);
    score.render(chunks[3], buf);

    let last_word = Paragraph::new(Line::from(vec![
        Span::styled("last word was ", dim),
        Span::styled(session.current_word().to_string(), bold),
    ]))
    .alignment(Alignment::Center);
    last_word.render(chunks[4], buf);

    let legend = Paragraph::new(Span::styled("(r)eplay (esc)ape", dim_italic))
        .alignment(Alignment::Center);
    legend.render(chunks[6], buf);

    render_confetti(app, area, buf);
}

fn render_confetti(app: &App, area: Rect, buf: &mut Buffer) {
    for piece in &app.confetti.pieces {
        let x = piece.x.round();
        let y = piece.y.round();
        if x < area.x as f64 || y < area.y as f64 {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        buf[(x, y)]
            .set_char(piece.symbol)
            .set_fg(CONFETTI_COLORS[piece.color_index % CONFETTI_COLORS.len()]);
    }
}
