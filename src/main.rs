use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{ConfigFile, GameConfig, GridSize};
use grid_snake::error::AppError;
use grid_snake::input::{GameInput, poll_inputs};
use grid_snake::logging;
use grid_snake::session::GameSession;
use grid_snake::terminal_runtime::TerminalSession;
use tracing::{debug, info};

/// How long one frame waits for keyboard input.
const FRAME_POLL_TIMEOUT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// Board edge length in cells.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Milliseconds per simulation step.
    #[arg(long = "step-ms")]
    step_ms: Option<u64>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with `grid_size`, `step_interval_ms`, `max_frame_delta_ms`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file (filter via GRID_SNAKE_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    logging::init(cli.log_file.as_deref())?;

    let session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(config, seed),
        None => GameSession::new(config),
    };

    run(session)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = GameConfig::default();

    if let Some(path) = &cli.config {
        config = config.merged_with(ConfigFile::load(path)?);
    }
    if let Some(size) = cli.grid_size {
        config.grid = GridSize::new(size);
    }
    if let Some(ms) = cli.step_ms {
        config.step_interval = Duration::from_millis(ms);
    }

    config.validate()?;
    Ok(config)
}

fn run(mut session: GameSession) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(&session)?;

        for input in poll_inputs(FRAME_POLL_TIMEOUT)? {
            if input == GameInput::Quit {
                info!(high_score = session.high_score(), "quit");
                return Ok(());
            }
            session.handle_input(input);
        }

        let now = Instant::now();
        let report = session.advance(now.duration_since(last_frame));
        last_frame = now;

        if let Some(update) = report.score {
            debug!(score = update.score, high_score = update.high_score, "score changed");
        }
    }
}
