//! Game configuration.
//!
//! Replaces hard-coded timing constants with an immutable value handed to
//! [`GameState`](super::game_state::GameState) at construction.

use super::constants::*;
use super::error::ConfigError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a round in seconds
    pub countdown_seconds: u32,

    /// Milliseconds between countdown ticks
    pub tick_interval_ms: u64,

    /// Remaining seconds at or below which every tick raises a panic cue
    pub panic_threshold_seconds: u32,

    /// Words to guess. Reshuffled whenever the pool runs dry.
    pub vocabulary: Vec<String>,

    /// Random seed for reproducible word order (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: COUNTDOWN_SECONDS,
            tick_interval_ms: TICK_INTERVAL_MS,
            panic_threshold_seconds: PANIC_THRESHOLD_SECONDS,
            vocabulary: DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config with a custom word list and default timing.
    pub fn with_vocabulary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: words.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config from `path`, or from the platform config directory.
    ///
    /// An explicit path must exist. The default location is optional: when
    /// no file is there the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_seconds == 0 {
            return Err(ConfigError::Invalid(
                "countdown_seconds must be at least 1".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.vocabulary.is_empty() {
            return Err(ConfigError::Invalid("vocabulary is empty".to_string()));
        }
        if let Some(index) = self.vocabulary.iter().position(|w| w.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "vocabulary entry {} is blank",
                index
            )));
        }
        Ok(())
    }

    /// Replaces values that would stall a round with their defaults.
    ///
    /// `GameState` and `GameSession` accept hand-built configs that never
    /// went through [`validate`](Self::validate), so they run this first.
    pub fn with_fallbacks(mut self) -> Self {
        if self.countdown_seconds == 0 {
            warn!(
                fallback = COUNTDOWN_SECONDS,
                "zero countdown, falling back to default"
            );
            self.countdown_seconds = COUNTDOWN_SECONDS;
        }
        if self.tick_interval_ms == 0 {
            warn!(
                fallback = TICK_INTERVAL_MS,
                "zero tick interval, falling back to default"
            );
            self.tick_interval_ms = TICK_INTERVAL_MS;
        }
        if self.vocabulary.is_empty() {
            warn!("empty vocabulary, falling back to default word list");
            self.vocabulary = Self::default().vocabulary;
        }
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Platform directories for config and logs.
pub fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "guess-the-word").ok_or(ConfigError::NoConfigDir)
}

/// `<config_dir>/config.json` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}
