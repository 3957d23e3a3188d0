//! Log setup for the terminal host.
//!
//! The terminal belongs to the UI, so events go to a file instead of stderr.

use crate::core::config::project_dirs;
use crate::core::constants::LOG_FILE_NAME;
use crate::core::error::{ConfigError, LoggingError};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "guess_the_word=info";

/// Directory the log file is written to.
pub fn default_log_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

pub fn env_filter() -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(DEFAULT_LOG_FILTER)?),
    }
}

/// Creates `dir` if needed and returns the log file path inside it.
pub fn prepare_log_file(dir: &Path) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(dir).map_err(|source| LoggingError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(LOG_FILE_NAME))
}

/// Installs a global subscriber appending to `<dir>/guess-the-word.log`.
pub fn init_file_logging(dir: &Path) -> Result<PathBuf, LoggingError> {
    let path = prepare_log_file(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter()?)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    info!(path = %path.display(), "logging initialized");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_prepare_log_file_creates_dir() {
        let dir = std::env::temp_dir().join(format!("guess-the-word-logs-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let path = prepare_log_file(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("guess-the-word.log"));
        let _ = fs::remove_dir_all(&dir);
    }
}
