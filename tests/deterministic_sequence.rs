use std::time::Duration;

use grid_snake::config::{GameConfig, GridSize};
use grid_snake::input::{Direction, GameInput};
use grid_snake::session::{GameSession, SessionStatus};
use grid_snake::simulation::{SimulationState, TerminalReason};
use grid_snake::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = SimulationState::new_with_seed(GridSize::new(8), 42);
    state.food = Some(Position::new(5, 4));

    let result = state.step(None);
    assert!(result.ate_food);
    assert_eq!(state.score, 1);
    assert_eq!(state.growth_pending, 1);
    assert_eq!(state.snake.head(), Position::new(5, 4));
    let food = state.food.expect("board has free cells");
    assert!(!state.snake.occupies(food));

    state.food = Some(Position::new(0, 7));
    let result = state.step(Some(Direction::Up));
    assert!(!result.terminal);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position::new(5, 3));

    for _ in 0..3 {
        assert!(!state.step(None).terminal);
    }
    assert_eq!(state.snake.head(), Position::new(5, 0));

    let result = state.step(None);
    assert!(result.terminal);
    assert_eq!(state.terminal_reason(), Some(TerminalReason::WallCollision));
    assert_eq!(state.snake.head(), Position::new(5, -1));
}

#[test]
fn body_collision_ends_the_round() {
    let mut state = SimulationState::new_with_seed(GridSize::new(8), 5);
    state.snake = Snake::from_segments(vec![
        Position::new(3, 3),
        Position::new(3, 4),
        Position::new(4, 4),
        Position::new(4, 3),
        Position::new(4, 2),
    ]);
    state.direction = Direction::Up;

    let result = state.step(Some(Direction::Right));

    assert!(result.terminal);
    assert_eq!(state.terminal_reason(), Some(TerminalReason::SelfCollision));
}

#[test]
fn quick_double_turn_lands_in_the_next_two_steps() {
    let mut session = GameSession::new_with_seed(GameConfig::default(), 8);
    session.advance(Duration::ZERO);
    assert_eq!(session.state().snake.head(), Position::new(5, 4));

    // All presses arrive inside one step interval.
    session.handle_input(GameInput::Direction(Direction::Down));
    // Reversal of the queued Down; dropped.
    session.handle_input(GameInput::Direction(Direction::Up));
    session.handle_input(GameInput::Direction(Direction::Left));
    // Reversal of the queued Left; dropped even though the queue is full.
    session.handle_input(GameInput::Direction(Direction::Right));

    let pending: Vec<Direction> = session.queue().pending().copied().collect();
    assert_eq!(pending, vec![Direction::Down, Direction::Left]);

    assert_eq!(session.advance(Duration::from_millis(50)).steps_run, 0);
    for _ in 0..4 {
        session.advance(Duration::from_millis(50));
    }
    assert_eq!(session.state().snake.head(), Position::new(5, 5));

    for _ in 0..5 {
        session.advance(Duration::from_millis(50));
    }
    assert_eq!(session.state().snake.head(), Position::new(4, 5));
    assert_eq!(session.state().direction, Direction::Left);
}

#[test]
fn reset_after_game_over_starts_a_clean_round() {
    let mut session = GameSession::new_with_seed(GameConfig::default(), 13);
    for _ in 0..40 {
        session.advance(Duration::from_millis(50));
    }
    assert_eq!(
        session.status(),
        SessionStatus::GameOver(TerminalReason::WallCollision)
    );

    session.handle_input(GameInput::Direction(Direction::Up));
    assert!(session.queue().is_empty());

    session.handle_input(GameInput::Reset);

    assert_eq!(session.status(), SessionStatus::Running);
    assert_eq!(
        session.state().snake.positions(),
        vec![Position::new(4, 4), Position::new(3, 4), Position::new(2, 4)]
    );
    assert_eq!(session.state().direction, Direction::Right);
    assert_eq!(session.advance(Duration::ZERO).steps_run, 1);
}
