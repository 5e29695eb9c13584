use std::collections::{HashSet, VecDeque};

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < grid.extent() && self.y < grid.extent()
    }

    /// Returns the neighbouring position one cell towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body, head first. Never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the starting snake: horizontal, centred, head facing right.
    #[must_use]
    pub fn starting(grid: GridSize) -> Self {
        let center = grid.extent() / 2;
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|offset| Position::new(center - offset, center))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head one cell towards `direction`.
    ///
    /// The tail is kept when `keep_tail` is set (growth) and dropped
    /// otherwise (plain translation).
    pub fn advance(&mut self, direction: Direction, keep_tail: bool) -> Position {
        let next_head = self.head().stepped(direction);

        self.body.push_front(next_head);
        if !keep_tail {
            let _ = self.body.pop_back();
        }

        next_head
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the set of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Copies the body into a plain vector, head first.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }
}
