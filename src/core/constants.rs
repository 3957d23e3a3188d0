// Countdown and timing
pub const COUNTDOWN_SECONDS: u32 = 60;
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const PANIC_THRESHOLD_SECONDS: u32 = 10;

// Host loop
pub const INPUT_POLL_MS: u64 = 50;
pub const BUZZ_DISPLAY_MS: u64 = 600;

// Vibration patterns in milliseconds, alternating wait / buzz.
pub const CORRECT_BUZZ_PATTERN: &[u64] = &[100, 100, 100, 100, 100, 100];
pub const PANIC_BUZZ_PATTERN: &[u64] = &[0, 200];
pub const GAME_OVER_BUZZ_PATTERN: &[u64] = &[0, 2000];
pub const NO_BUZZ_PATTERN: &[u64] = &[0];

/// Words drawn during a round when no custom vocabulary is configured.
pub const DEFAULT_VOCABULARY: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "guess-the-word.log";
