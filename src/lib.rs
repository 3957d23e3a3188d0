//! Guess the Word - a timed single-player word guessing game.
//!
//! This module exposes the game logic for testing and external use.

pub mod core;
pub mod logging;

pub use crate::core::*;
