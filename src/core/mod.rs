//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod observable;
pub mod session;
pub mod timer;
pub mod word_pool;

pub use config::GameConfig;
pub use constants::*;
pub use error::{ConfigError, LoggingError};
pub use game_state::{format_elapsed_time, Buzz, GamePhase, GameState, ScoreSummary};
pub use observable::{Observable, SubscriptionId};
pub use session::GameSession;
pub use timer::CountdownTimer;
pub use word_pool::WordPool;
