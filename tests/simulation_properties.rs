use std::time::Duration;

use grid_snake::clock::FixedStepClock;
use grid_snake::config::{GameConfig, GridSize, INITIAL_SNAKE_LENGTH};
use grid_snake::input::Direction;
use grid_snake::session::GameSession;
use grid_snake::simulation::SimulationState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn random_direction(rng: &mut StdRng) -> Option<Direction> {
    // Roughly half the steps carry no input.
    let index = rng.gen_range(0..8);
    DIRECTIONS.get(index).copied()
}

#[test]
fn length_tracks_food_eaten_across_random_games() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SimulationState::new_with_seed(GridSize::new(8), seed);
        let mut eaten = 0;

        for _ in 0..500 {
            let food_before = state.food;
            let result = state.step(random_direction(&mut rng));
            if result.terminal {
                break;
            }

            if result.ate_food {
                eaten += 1;
                if let Some(food) = state.food {
                    assert_ne!(Some(food), food_before);
                    assert!(!state.snake.occupies(food), "seed {seed}: food spawned on snake");
                }
            }

            let growth = state.growth_pending as usize;
            assert_eq!(state.snake.len() + growth, INITIAL_SNAKE_LENGTH + eaten);
            assert_eq!(state.score as usize, eaten);
            assert!(state.snake.head().is_within_bounds(state.grid()));
        }
    }
}

#[test]
fn terminal_state_never_changes_again() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SimulationState::new_with_seed(GridSize::new(6), seed);

        for _ in 0..10_000 {
            if state.step(random_direction(&mut rng)).terminal {
                break;
            }
        }
        assert!(state.is_terminal(), "seed {seed}: random walk never collided");

        let snake = state.snake.clone();
        let direction = state.direction;
        let food = state.food;
        let score = state.score;

        for _ in 0..20 {
            let result = state.step(random_direction(&mut rng));
            assert!(result.terminal);
            assert!(!result.ate_food);
        }

        assert_eq!(state.snake, snake);
        assert_eq!(state.direction, direction);
        assert_eq!(state.food, food);
        assert_eq!(state.score, score);
    }
}

#[test]
fn applied_direction_never_reverses() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut session = GameSession::new_with_seed(GameConfig::default(), 77);
    let mut previous = session.state().direction;

    for _ in 0..2_000 {
        for _ in 0..rng.gen_range(0..4) {
            if let Some(direction) = random_direction(&mut rng) {
                session.enqueue_direction(direction);
            }
        }

        let report = session.advance(Duration::from_millis(rng.gen_range(0..=60)));
        if report.steps_run > 0 {
            let current = session.state().direction;
            assert!(!current.is_reverse_of(previous));
            previous = current;
        }

        if session.state().is_terminal() {
            session.reset();
            previous = session.state().direction;
        }
    }
}

#[test]
fn clock_is_invariant_to_frame_rate_below_the_cap() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let mut jittery = FixedStepClock::from_config(&config);
        let mut steady = FixedStepClock::from_config(&config);

        let mut total = Duration::ZERO;
        let mut jittery_steps = 0;
        for _ in 0..rng.gen_range(10..400) {
            let delta = Duration::from_micros(rng.gen_range(0..=50_000));
            total += delta;
            let advance = jittery.advance(delta);
            jittery_steps += advance.steps_to_run;
            assert!((0.0..=1.0).contains(&advance.interpolation));
        }

        // Replay the same total in cap-sized chunks plus a remainder.
        let mut steady_steps = 0;
        let mut remaining = total;
        loop {
            let delta = remaining.min(config.max_frame_delta);
            remaining -= delta;
            steady_steps += steady.advance(delta).steps_to_run;
            if remaining.is_zero() {
                break;
            }
        }

        assert_eq!(jittery_steps, steady_steps);
        assert_eq!(jittery.interpolation(), steady.interpolation());
    }
}
