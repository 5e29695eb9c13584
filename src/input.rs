use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions. Grid y grows downward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)` for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns true when `other` points exactly the other way.
    #[must_use]
    pub fn is_reverse_of(self, other: Self) -> bool {
        self == other.opposite()
    }
}

/// High-level input events consumed by the game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Reset,
    Pause,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !next.is_reverse_of(current)
}

/// Maps one terminal key event to a game input.
///
/// Only key presses count; repeats and releases reported by terminals with
/// the kitty protocol are ignored.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up => GameInput::Direction(Direction::Up),
        KeyCode::Down => GameInput::Direction(Direction::Down),
        KeyCode::Left => GameInput::Direction(Direction::Left),
        KeyCode::Right => GameInput::Direction(Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => GameInput::Direction(Direction::Up),
            's' => GameInput::Direction(Direction::Down),
            'a' => GameInput::Direction(Direction::Left),
            'd' => GameInput::Direction(Direction::Right),
            'r' => GameInput::Reset,
            'p' | ' ' => GameInput::Pause,
            'q' => GameInput::Quit,
            _ => return None,
        },
        KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Waits up to `timeout` for terminal input, then drains everything else
/// already pending without blocking.
///
/// Events come back in arrival order so the input queue sees them FIFO.
pub fn poll_inputs(timeout: Duration) -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    if !event::poll(timeout)? {
        return Ok(inputs);
    }

    loop {
        if let Event::Key(key) = event::read()? {
            inputs.extend(map_key_event(key));
        }

        if !event::poll(Duration::ZERO)? {
            break;
        }
    }

    Ok(inputs)
}
