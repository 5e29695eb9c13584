use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_HEIGHT, CELL_WIDTH, GridSize};
use crate::input::Direction;
use crate::interpolation::{BlendedPosition, interpolated_segments};
use crate::session::{GameSession, SessionStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Fixed colors for every drawn element.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub cell_light: Color,
    pub cell_dark: Color,
    pub food: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub eyes: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,
}

pub const PALETTE: Palette = Palette {
    cell_light: Color::Rgb(169, 215, 81),
    cell_dark: Color::Rgb(162, 208, 73),
    food: Color::Red,
    snake_head: Color::Rgb(90, 150, 255),
    snake_body: Color::Rgb(45, 105, 208),
    snake_tail: Color::Rgb(0, 60, 160),
    eyes: Color::White,
    border: Color::Rgb(0, 174, 0),
    accent: Color::Yellow,
    muted: Color::DarkGray,
};

const GLYPH_FILL: &str = " ";

/// Renders the full game frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession) {
    let area = frame.area();
    let [board_row, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

    let grid = session.state().grid();
    let board = centered_board(board_row, grid);
    let block = Block::bordered().border_style(Style::new().fg(PALETTE.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_cells(frame, inner, grid);
    if let Some(food) = session.state().food {
        render_food(frame, inner, food);
    }
    render_snake(frame, inner, session);

    render_hud(frame, hud_row, session, &PALETTE);

    match session.status() {
        SessionStatus::Paused => render_pause_menu(frame, board),
        SessionStatus::GameOver(reason) => render_game_over_menu(
            frame,
            board,
            session.state().score,
            session.high_score(),
            reason,
        ),
        SessionStatus::Running => {}
    }
}

fn centered_board(area: Rect, grid: GridSize) -> Rect {
    let width = grid.size.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.size.saturating_mul(CELL_HEIGHT).saturating_add(2);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, board, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);

    board
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, grid: GridSize) {
    for y in 0..grid.extent() {
        for x in 0..grid.extent() {
            let color = if (x + y) % 2 == 0 {
                PALETTE.cell_light
            } else {
                PALETTE.cell_dark
            };
            fill_cell(frame, inner, cell_origin(Position::new(x, y)), Style::new().bg(color));
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Position) {
    let (x, y) = cell_origin(food);
    let center = (x + i32::from(CELL_WIDTH) / 2 - 1, y + i32::from(CELL_HEIGHT) / 2);
    put_str(frame, inner, center, "●●", Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let state = session.state();
    // The fatal move is not animated; show the last legal position.
    let t = match session.status() {
        SessionStatus::GameOver(_) => 0.0,
        _ => session.interpolation(),
    };
    let current = state.snake.positions();
    let segments = interpolated_segments(session.snapshot(), &current, t);

    let last = segments.len().saturating_sub(1);
    for (index, segment) in segments.iter().enumerate().rev() {
        let color = match index {
            0 => PALETTE.snake_head,
            i if i == last => PALETTE.snake_tail,
            _ => PALETTE.snake_body,
        };
        let origin = blended_origin(*segment);
        fill_cell(frame, inner, origin, Style::new().bg(color));
    }

    if let Some(head) = segments.first() {
        render_eyes(frame, inner, blended_origin(*head), state.direction);
    }
}

fn render_eyes(frame: &mut Frame<'_>, inner: Rect, origin: (i32, i32), direction: Direction) {
    let eye = Style::new()
        .fg(PALETTE.eyes)
        .bg(PALETTE.snake_head)
        .add_modifier(Modifier::BOLD);
    let (x, y) = origin;
    let right_edge = x + i32::from(CELL_WIDTH) - 1;
    let bottom_edge = y + i32::from(CELL_HEIGHT) - 1;

    match direction {
        Direction::Up => put_str(frame, inner, (x + 1, y), "••", eye),
        Direction::Down => put_str(frame, inner, (x + 1, bottom_edge), "••", eye),
        Direction::Left => {
            put_str(frame, inner, (x, y), "•", eye);
            put_str(frame, inner, (x, bottom_edge), "•", eye);
        }
        Direction::Right => {
            put_str(frame, inner, (right_edge, y), "•", eye);
            put_str(frame, inner, (right_edge, bottom_edge), "•", eye);
        }
    }
}

/// Top-left corner of a grid cell, in board-relative terminal cells.
fn cell_origin(position: Position) -> (i32, i32) {
    (
        position.x * i32::from(CELL_WIDTH),
        position.y * i32::from(CELL_HEIGHT),
    )
}

fn blended_origin(position: BlendedPosition) -> (i32, i32) {
    (
        (position.x * f64::from(CELL_WIDTH)).round() as i32,
        (position.y * f64::from(CELL_HEIGHT)).round() as i32,
    )
}

fn fill_cell(frame: &mut Frame<'_>, inner: Rect, origin: (i32, i32), style: Style) {
    let (x, y) = origin;
    for row in 0..i32::from(CELL_HEIGHT) {
        for column in 0..i32::from(CELL_WIDTH) {
            put_str(frame, inner, (x + column, y + row), GLYPH_FILL, style);
        }
    }
}

fn put_str(frame: &mut Frame<'_>, inner: Rect, offset: (i32, i32), text: &str, style: Style) {
    let Some((x, y)) = board_to_terminal(inner, offset) else {
        return;
    };
    let width = usize::from(inner.right() - x);
    frame.buffer_mut().set_stringn(x, y, text, width, style);
}

fn board_to_terminal(inner: Rect, offset: (i32, i32)) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(offset.0).ok()?;
    let y_offset = u16::try_from(offset.1).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
