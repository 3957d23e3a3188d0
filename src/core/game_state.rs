//! Game state for one round: current word, score, countdown and finish signal.
//!
//! The host drives it by calling [`GameState::on_correct`] / [`GameState::on_skip`]
//! on input and [`GameState::tick`] once per tick interval. All calls must be
//! serialized by the host; there is no internal synchronization.
//!
//! When the word pool runs dry it is refilled with a fresh shuffle of the
//! vocabulary and play continues. A round only ends when the countdown
//! reaches zero.

use super::config::GameConfig;
use super::constants::*;
use super::observable::{Observable, SubscriptionId};
use super::word_pool::WordPool;
use rand::Rng;
use tracing::{debug, info, trace};

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Constructed but never initialized. No word has been drawn.
    #[default]
    Idle,
    Playing,
    /// Countdown hit zero and the host has not reacted yet.
    JustFinished,
    /// Host consumed the finish signal. Only `initialize` leaves this state.
    Acknowledged,
}

/// Haptic cue raised by game events. Hosts without a vibrator can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Buzz {
    #[default]
    NoBuzz,
    Correct,
    Panic,
    GameOver,
}

impl Buzz {
    /// Vibration pattern in milliseconds, alternating wait / buzz.
    pub fn pattern_ms(&self) -> &'static [u64] {
        match self {
            Self::NoBuzz => NO_BUZZ_PATTERN,
            Self::Correct => CORRECT_BUZZ_PATTERN,
            Self::Panic => PANIC_BUZZ_PATTERN,
            Self::GameOver => GAME_OVER_BUZZ_PATTERN,
        }
    }
}

/// Final numbers handed to the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub final_score: i32,
    pub correct: u32,
    pub skipped: u32,
    pub words_shown: u32,
}

/// Main game state.
#[derive(Debug)]
pub struct GameState<R: Rng> {
    config: GameConfig,
    rng: R,
    pool: WordPool,

    word: Observable<Option<String>>,
    score: Observable<i32>,
    remaining_seconds: Observable<u32>,
    phase: Observable<GamePhase>,
    buzz: Observable<Buzz>,

    correct_count: u32,
    skip_count: u32,
    /// Words drawn this round, including the one currently displayed.
    words_shown: u32,
}

impl<R: Rng> GameState<R> {
    /// Creates an idle game. Call [`initialize`](Self::initialize) to start a round.
    ///
    /// A zero countdown or an empty vocabulary is replaced by its default, so
    /// a playing round always has a word and time left on the clock.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let config = config.with_fallbacks();
        let pool = WordPool::new(config.vocabulary.clone());
        let countdown = config.countdown_seconds;

        Self {
            config,
            rng,
            pool,
            word: Observable::new(None),
            score: Observable::new(0),
            remaining_seconds: Observable::new(countdown),
            phase: Observable::new(GamePhase::Idle),
            buzz: Observable::new(Buzz::NoBuzz),
            correct_count: 0,
            skip_count: 0,
            words_shown: 0,
        }
    }

    /// Starts a fresh round: reshuffles the vocabulary, zeroes the score,
    /// draws the first word and resets the countdown.
    pub fn initialize(&mut self) {
        self.pool.refill(&mut self.rng);
        self.correct_count = 0;
        self.skip_count = 0;
        self.words_shown = 0;

        self.score.set(0);
        self.buzz.set(Buzz::NoBuzz);
        self.remaining_seconds.set(self.config.countdown_seconds);
        self.phase.set(GamePhase::Playing);
        self.draw_next();

        info!(
            countdown = self.config.countdown_seconds,
            words = self.pool.vocabulary().len(),
            "round started"
        );
    }

    /// Moves to the next word. Returns false outside of [`GamePhase::Playing`].
    pub fn advance_word(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.draw_next();
        true
    }

    /// Player guessed the word.
    pub fn on_correct(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.correct_count += 1;
        self.score.set(*self.score.get() + 1);
        self.buzz.set(Buzz::Correct);
        self.draw_next();
        true
    }

    /// Player gave up on the word.
    pub fn on_skip(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.skip_count += 1;
        self.score.set(*self.score.get() - 1);
        self.draw_next();
        true
    }

    /// One countdown step. Returns false if the round is not running.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let remaining = self.remaining_seconds.get().saturating_sub(1);
        self.remaining_seconds.set(remaining);
        trace!(remaining, "tick");

        if remaining == 0 {
            self.phase.set(GamePhase::JustFinished);
            self.buzz.set(Buzz::GameOver);
            info!(
                score = *self.score.get(),
                correct = self.correct_count,
                skipped = self.skip_count,
                "round finished"
            );
        } else if remaining <= self.config.panic_threshold_seconds {
            self.buzz.set(Buzz::Panic);
        }
        true
    }

    /// Consumes the finish signal. Returns true only for the first call after
    /// the round ends.
    pub fn acknowledge_finish(&mut self) -> bool {
        if *self.phase.get() != GamePhase::JustFinished {
            return false;
        }
        self.phase.set(GamePhase::Acknowledged);
        debug!("finish acknowledged");
        true
    }

    /// Host has played the current buzz.
    pub fn acknowledge_buzz(&mut self) {
        if *self.buzz.get() != Buzz::NoBuzz {
            self.buzz.set(Buzz::NoBuzz);
        }
    }

    fn draw_next(&mut self) {
        if self.pool.is_empty() {
            self.pool.refill(&mut self.rng);
            debug!(words = self.pool.remaining(), "word pool exhausted, reshuffled");
        }
        if let Some(word) = self.pool.draw() {
            self.words_shown += 1;
            debug!(%word, left = self.pool.remaining(), "next word");
            self.word.set(Some(word));
        }
    }

    // Subscriptions. Each observer is called immediately with the current value.

    pub fn subscribe_word<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Option<String>) + 'static,
    {
        self.word.subscribe(observer)
    }

    pub fn subscribe_score<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&i32) + 'static,
    {
        self.score.subscribe(observer)
    }

    pub fn subscribe_remaining_seconds<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&u32) + 'static,
    {
        self.remaining_seconds.subscribe(observer)
    }

    pub fn subscribe_phase<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GamePhase) + 'static,
    {
        self.phase.subscribe(observer)
    }

    pub fn subscribe_buzz<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Buzz) + 'static,
    {
        self.buzz.subscribe(observer)
    }

    /// Removes one observer registered through any `subscribe_*` method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.word.unsubscribe(id)
            || self.score.unsubscribe(id)
            || self.remaining_seconds.unsubscribe(id)
            || self.phase.unsubscribe(id)
            || self.buzz.unsubscribe(id)
    }

    /// Drops every observer. Called on host teardown.
    pub fn clear_subscribers(&mut self) {
        self.word.clear();
        self.score.clear();
        self.remaining_seconds.clear();
        self.phase.clear();
        self.buzz.clear();
    }

    // Accessors

    /// None until the first `initialize`.
    pub fn current_word(&self) -> Option<&str> {
        self.word.get().as_deref()
    }

    pub fn score(&self) -> i32 {
        *self.score.get()
    }

    pub fn remaining_seconds(&self) -> u32 {
        *self.remaining_seconds.get()
    }

    /// Countdown formatted as `MM:SS`.
    pub fn remaining_time_string(&self) -> String {
        format_elapsed_time(u64::from(self.remaining_seconds()))
    }

    pub fn phase(&self) -> GamePhase {
        *self.phase.get()
    }

    pub fn buzz(&self) -> Buzz {
        *self.buzz.get()
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == GamePhase::Playing
    }

    /// True from the moment the countdown hits zero until the finish is acknowledged.
    pub fn is_finished(&self) -> bool {
        self.phase() == GamePhase::JustFinished
    }

    /// Remaining time is inside the panic window.
    pub fn in_panic(&self) -> bool {
        self.is_playing() && self.remaining_seconds() <= self.config.panic_threshold_seconds
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn skip_count(&self) -> u32 {
        self.skip_count
    }

    pub fn words_shown(&self) -> u32 {
        self.words_shown
    }

    pub fn words_left_in_pool(&self) -> usize {
        self.pool.remaining()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            final_score: self.score(),
            correct: self.correct_count,
            skipped: self.skip_count,
            words_shown: self.words_shown,
        }
    }
}

/// Formats seconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_elapsed_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
