use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::renderer::Palette;
use crate::session::{GameSession, SessionStatus};

const SEPARATOR: &str = " │ ";

/// Renders the score row and the key-help row into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, palette: &Palette) {
    let [score_row, help_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let state = session.state();
    frame.render_widget(
        Paragraph::new(score_line(
            state.snake.len(),
            state.score,
            session.high_score(),
            palette,
        ))
        .alignment(Alignment::Center),
        score_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(help_text(session.status())))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted)),
        help_row,
    );
}

fn score_line(length: usize, score: u32, high_score: u32, palette: &Palette) -> Line<'static> {
    // Score is highlighted while it holds the high score.
    let score_style = if score > 0 && score == high_score {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw("Length: "),
        Span::raw(length.to_string()),
        Span::styled(SEPARATOR, Style::default().fg(palette.muted)),
        Span::raw("Score: "),
        Span::styled(score.to_string(), score_style),
        Span::styled(SEPARATOR, Style::default().fg(palette.muted)),
        Span::raw("Highscore: "),
        Span::raw(high_score.to_string()),
    ])
}

fn help_text(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Running => "arrows/WASD move · P pause · R restart · Q quit",
        SessionStatus::Paused => "P resume · R restart · Q quit",
        SessionStatus::GameOver(_) => "R restart · Q quit",
    }
}
