use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    GridSize { size: u16, min: u16, max: u16 },

    #[error("step interval must be greater than zero")]
    ZeroStepInterval,

    #[error("frame delta cap must be greater than zero")]
    ZeroFrameDelta,

    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// No free cell is left for food.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    #[error("no free cell left on a board of {cells} cells")]
    BoardFull { cells: usize },
}

/// Top-level failure of the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),

    #[error("failed to open log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    LogInit(String),
}
