use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default grid edge length in cells.
pub const DEFAULT_GRID_SIZE: u16 = 8;

/// Smallest grid that still fits the starting snake with room to turn.
pub const MIN_GRID_SIZE: u16 = 4;

/// Largest grid the terminal renderer is expected to fit.
pub const MAX_GRID_SIZE: u16 = 64;

/// Default simulation step interval in milliseconds.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 250;

/// Ceiling applied to one frame's wall-clock delta in milliseconds.
pub const MAX_FRAME_DELTA_MS: u64 = 50;

/// Segment count of a freshly started snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Pending direction changes the input queue holds.
pub const MAX_QUEUED_DIRECTIONS: usize = 2;

/// Terminal columns drawn per grid cell.
pub const CELL_WIDTH: u16 = 4;

/// Terminal rows drawn per grid cell.
pub const CELL_HEIGHT: u16 = 2;

/// Square grid dimensions.
///
/// The board is always square; `size` is the edge length in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub size: u16,
}

impl GridSize {
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self { size }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Returns the edge length as a signed coordinate bound.
    #[must_use]
    pub fn extent(self) -> i32 {
        i32::from(self.size)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// Runtime configuration for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub step_interval: Duration,
    pub max_frame_delta: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            max_frame_delta: Duration::from_millis(MAX_FRAME_DELTA_MS),
        }
    }
}

/// On-disk overrides; every field is optional.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub grid_size: Option<u16>,
    pub step_interval_ms: Option<u64>,
    pub max_frame_delta_ms: Option<u64>,
}

impl ConfigFile {
    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl GameConfig {
    /// Applies file overrides on top of `self`.
    #[must_use]
    pub fn merged_with(mut self, file: ConfigFile) -> Self {
        if let Some(size) = file.grid_size {
            self.grid = GridSize::new(size);
        }
        if let Some(ms) = file.step_interval_ms {
            self.step_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = file.max_frame_delta_ms {
            self.max_frame_delta = Duration::from_millis(ms);
        }
        self
    }

    /// Checks that the values describe a playable board and a running clock.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.grid.size;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::GridSize {
                size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if self.step_interval.is_zero() {
            return Err(ConfigError::ZeroStepInterval);
        }

        if self.max_frame_delta.is_zero() {
            return Err(ConfigError::ZeroFrameDelta);
        }

        Ok(())
    }
}
