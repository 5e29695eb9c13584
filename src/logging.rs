use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "GRID_SNAKE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a file-backed `tracing` subscriber.
///
/// The game owns the terminal in raw mode, so logs never go to stdout or
/// stderr. Without a path no subscriber is installed and events are dropped.
pub fn init(log_file: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|error| AppError::LogInit(error.to_string()))
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let missing_parent = dir.path().join("missing").join("snake.log");

        assert!(init(Some(missing_parent.as_path())).is_err());
    }
}
