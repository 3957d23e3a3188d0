//! A game session: the game state plus the countdown timer that drives it.

use super::config::GameConfig;
use super::game_state::GameState;
use super::timer::CountdownTimer;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Owns one [`GameState`] and its [`CountdownTimer`].
///
/// The timer is cancelled as soon as the round ends or the session is torn
/// down, so no tick ever reaches a finished or discarded state.
#[derive(Debug)]
pub struct GameSession<R: Rng> {
    state: GameState<R>,
    timer: CountdownTimer,
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let config = config.with_fallbacks();
        let timer = CountdownTimer::new(config.tick_interval());
        Self {
            state: GameState::new(config, rng),
            timer,
        }
    }

    /// Starts a new round at `now`.
    pub fn start(&mut self, now: Instant) {
        self.state.initialize();
        self.timer.start(now);
        debug!(interval_ms = self.timer.interval().as_millis() as u64, "timer started");
    }

    /// Delivers every tick due at `now`. Returns the number delivered.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let due = self.timer.poll(now);
        let mut delivered = 0;
        for _ in 0..due {
            if !self.state.tick() {
                break;
            }
            delivered += 1;
        }
        if self.timer.is_running() && !self.state.is_playing() {
            self.timer.cancel();
            debug!("timer cancelled, round over");
        }
        delivered
    }

    pub fn on_correct(&mut self) -> bool {
        self.state.on_correct()
    }

    pub fn on_skip(&mut self) -> bool {
        self.state.on_skip()
    }

    /// Tears the session down: stops the timer and drops all observers.
    pub fn end(&mut self) {
        self.timer.cancel();
        self.state.clear_subscribers();
        info!(score = self.state.score(), "session ended");
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// How long the host may block waiting for input before the next tick.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }
}
