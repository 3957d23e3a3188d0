use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or validating a [`GameConfig`](super::config::GameConfig).
///
/// Gameplay operations never fail; this only covers the configuration surface.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Failures installing the log subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("could not open log file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter")]
    Filter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("a global log subscriber is already installed")]
    AlreadyInitialized,
}
