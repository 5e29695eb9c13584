use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::simulation::TerminalReason;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    reason: TerminalReason,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let is_new_high = score > 0 && score == high_score;
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(cause_text(reason)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Highscore: {high_score}")),
        Line::from(if is_new_high { "New highscore!" } else { "" }),
        Line::from("[R] Play again  [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_text(reason: TerminalReason) -> &'static str {
    match reason {
        TerminalReason::WallCollision => "You hit the wall",
        TerminalReason::SelfCollision => "You bit yourself",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
