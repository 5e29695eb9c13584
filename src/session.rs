use std::time::Duration;

use tracing::{debug, info};

use crate::clock::FixedStepClock;
use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::input::{Direction, GameInput};
use crate::input_queue::{EnqueueOutcome, InputQueue};
use crate::interpolation::StepSnapshot;
use crate::simulation::{SimulationState, TerminalReason};

/// Current high-level status of the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Running,
    Paused,
    GameOver(TerminalReason),
}

/// Score values for the score display after a step changed them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreUpdate {
    pub score: u32,
    pub high_score: u32,
}

/// Summary of one [`GameSession::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub steps_run: u32,
    pub score: Option<ScoreUpdate>,
    /// Set on the frame whose step ended the round.
    pub terminal_reached: bool,
    pub interpolation: f64,
}

/// Everything that belongs to one round and is replaced together on reset.
#[derive(Debug, Clone)]
struct Round {
    state: SimulationState,
    queue: InputQueue,
    clock: FixedStepClock,
    snapshot: StepSnapshot,
    paused: bool,
}

impl Round {
    fn new(config: &GameConfig, spawner: FoodSpawner) -> Self {
        let state = SimulationState::with_spawner(config.grid, spawner);
        let queue = InputQueue::new(state.direction);
        let snapshot = StepSnapshot::new(state.snake.positions());

        Self {
            state,
            queue,
            clock: FixedStepClock::from_config(config),
            snapshot,
            paused: false,
        }
    }
}

/// Owns the running round plus the process-lifetime high score.
///
/// The host feeds input events and frame deltas; the session runs whatever
/// steps the clock asks for, each consuming at most one queued direction.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    seed: Option<u64>,
    rounds_started: u64,
    round: Round,
    high_score: u32,
}

impl GameSession {
    /// Creates a session with entropy-seeded food placement.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates a session whose rounds are reproducible.
    ///
    /// Round `n` (counting from zero) draws food from `seed + n`.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::build(config, Some(seed))
    }

    fn build(config: GameConfig, seed: Option<u64>) -> Self {
        let round = Round::new(&config, spawner_for(seed, 0));
        info!(grid = config.grid.size, step = ?config.step_interval, ?seed, "session started");

        Self {
            config,
            seed,
            rounds_started: 1,
            round,
            high_score: 0,
        }
    }

    /// Applies one input event. `Quit` is left to the host.
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.enqueue_direction(direction);
            }
            GameInput::Reset => self.reset(),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Quit => {}
        }
    }

    /// Buffers a direction change for an upcoming step.
    pub fn enqueue_direction(&mut self, direction: Direction) -> Option<EnqueueOutcome> {
        if self.round.paused || self.round.state.is_terminal() {
            return None;
        }

        let outcome = self.round.queue.enqueue(direction);
        debug!(?direction, ?outcome, "direction offered");
        Some(outcome)
    }

    /// Pauses or resumes the round. Has no effect once the round is over.
    pub fn toggle_pause(&mut self) {
        if self.round.state.is_terminal() {
            return;
        }
        self.round.paused = !self.round.paused;
        info!(paused = self.round.paused, "pause toggled");
    }

    /// Starts a new round, keeping only the high score.
    ///
    /// The whole round is rebuilt and swapped in with one assignment, so no
    /// caller can observe a half-reset state.
    pub fn reset(&mut self) {
        let spawner = spawner_for(self.seed, self.rounds_started);
        self.round = Round::new(&self.config, spawner);
        self.rounds_started += 1;
        info!(round = self.rounds_started, high_score = self.high_score, "round reset");
    }

    /// Feeds one frame's wall-clock delta and runs the steps it pays for.
    ///
    /// Paused and finished rounds do not advance the clock.
    pub fn advance(&mut self, real_delta: Duration) -> FrameReport {
        let round = &mut self.round;
        if round.paused || round.state.is_terminal() {
            return FrameReport {
                steps_run: 0,
                score: None,
                terminal_reached: false,
                interpolation: round.clock.interpolation(),
            };
        }

        let due = round.clock.advance(real_delta);
        let mut report = FrameReport {
            steps_run: 0,
            score: None,
            terminal_reached: false,
            interpolation: due.interpolation,
        };

        for _ in 0..due.steps_to_run {
            let next = round.queue.dequeue_next(round.state.direction);
            round.snapshot = StepSnapshot::new(round.state.snake.positions());
            let result = round.state.step(next);
            report.steps_run += 1;

            if result.ate_food {
                self.high_score = self.high_score.max(round.state.score);
                report.score = Some(ScoreUpdate {
                    score: round.state.score,
                    high_score: self.high_score,
                });
            }

            if result.terminal {
                report.terminal_reached = true;
                break;
            }
        }

        report
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if let Some(reason) = self.round.state.terminal_reason() {
            return SessionStatus::GameOver(reason);
        }
        if self.round.paused {
            SessionStatus::Paused
        } else {
            SessionStatus::Running
        }
    }

    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.round.state
    }

    /// Snake positions from before the latest step.
    #[must_use]
    pub fn snapshot(&self) -> &StepSnapshot {
        &self.round.snapshot
    }

    #[must_use]
    pub fn interpolation(&self) -> f64 {
        self.round.clock.interpolation()
    }

    #[must_use]
    pub fn queue(&self) -> &InputQueue {
        &self.round.queue
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.round.paused
    }
}

fn spawner_for(seed: Option<u64>, round: u64) -> FoodSpawner {
    match seed {
        Some(seed) => FoodSpawner::new_with_seed(seed.wrapping_add(round)),
        None => FoodSpawner::from_entropy(),
    }
}
