use tracing::{debug, info, warn};

use crate::config::GridSize;
use crate::food::FoodSpawner;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TerminalReason {
    WallCollision,
    SelfCollision,
}

/// Outcome of one simulation step.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct StepResult {
    pub ate_food: bool,
    pub terminal: bool,
}

impl StepResult {
    const TERMINAL: Self = Self {
        ate_food: false,
        terminal: true,
    };
}

/// Complete grid state for one round.
///
/// Mutated only through [`SimulationState::step`]. Once a collision sets the
/// terminal reason every later step is a no-op.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub snake: Snake,
    pub direction: Direction,
    pub growth_pending: u32,
    pub food: Option<Position>,
    pub score: u32,
    pub step_count: u64,
    terminal: Option<TerminalReason>,
    grid: GridSize,
    spawner: FoodSpawner,
}

impl SimulationState {
    /// Creates a fresh round whose food placement is reproducible.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_spawner(grid, FoodSpawner::new_with_seed(seed))
    }

    /// Creates a fresh round with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::with_spawner(grid, FoodSpawner::from_entropy())
    }

    /// Creates a fresh round drawing food from `spawner`.
    #[must_use]
    pub fn with_spawner(grid: GridSize, mut spawner: FoodSpawner) -> Self {
        let snake = Snake::starting(grid);
        let food = spawner.spawn(&snake.occupied_cells(), grid).ok();

        Self {
            snake,
            direction: Direction::Right,
            growth_pending: 0,
            food,
            score: 0,
            step_count: 0,
            terminal: None,
            grid,
            spawner,
        }
    }

    /// Advances the round by one grid cell.
    ///
    /// `next_direction` is applied first unless it would reverse the snake.
    /// The tail is released before the collision scan, so moving into the
    /// cell the tail vacates this step is legal.
    pub fn step(&mut self, next_direction: Option<Direction>) -> StepResult {
        if self.terminal.is_some() {
            return StepResult::TERMINAL;
        }

        if let Some(next) = next_direction {
            if direction_change_is_valid(self.direction, next) {
                self.direction = next;
            } else {
                warn!(?next, current = ?self.direction, "reversal reached the simulation, ignored");
            }
        }

        self.step_count += 1;

        let keep_tail = self.growth_pending > 0;
        if keep_tail {
            self.growth_pending -= 1;
        }
        let head = self.snake.advance(self.direction, keep_tail);

        if let Some(reason) = self.collision_at(head) {
            info!(?reason, score = self.score, steps = self.step_count, "round over");
            self.terminal = Some(reason);
            return StepResult::TERMINAL;
        }

        let ate_food = self.food == Some(head);
        if ate_food {
            self.score += 1;
            self.growth_pending += 1;
            self.respawn_food();
            info!(score = self.score, food = ?self.food, "food eaten");
        }

        debug!(?head, direction = ?self.direction, len = self.snake.len(), "step");

        StepResult {
            ate_food,
            terminal: false,
        }
    }

    fn collision_at(&self, head: Position) -> Option<TerminalReason> {
        if !head.is_within_bounds(self.grid) {
            return Some(TerminalReason::WallCollision);
        }

        if self.snake.head_overlaps_body() {
            return Some(TerminalReason::SelfCollision);
        }

        None
    }

    fn respawn_food(&mut self) {
        match self.spawner.spawn(&self.snake.occupied_cells(), self.grid) {
            Ok(position) => self.food = Some(position),
            Err(error) => {
                info!(%error, "board is full, no more food");
                self.food = None;
            }
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    #[must_use]
    pub fn terminal_reason(&self) -> Option<TerminalReason> {
        self.terminal
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}
