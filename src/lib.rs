//! Grid Snake with a fixed-timestep simulation, buffered input and
//! interpolated rendering.
//!
//! The simulation modules (`input_queue`, `food`, `snake`, `simulation`,
//! `clock`, `session`, `interpolation`) have no terminal dependency; the
//! remaining modules host them in a crossterm/ratatui terminal.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod input;
pub mod input_queue;
pub mod interpolation;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod simulation;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
