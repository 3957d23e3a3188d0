//! Integration test: session timing
//!
//! A session pairs the game with its countdown timer. These tests feed it a
//! synthetic clock instead of sleeping.

use guess_the_word::{GameConfig, GamePhase, GameSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn session(config: GameConfig) -> GameSession<ChaCha8Rng> {
    GameSession::new(config, ChaCha8Rng::seed_from_u64(1))
}

/// Polls the session every `step` until `until`, like a host loop would.
fn run_loop(
    session: &mut GameSession<ChaCha8Rng>,
    start: Instant,
    until: Duration,
    step: Duration,
) {
    let mut elapsed = Duration::ZERO;
    while elapsed <= until {
        session.pump(start + elapsed);
        elapsed += step;
    }
}

#[test]
fn test_full_round_at_host_poll_rate() {
    let start = Instant::now();
    let mut session = session(GameConfig::default());
    session.start(start);

    run_loop(
        &mut session,
        start,
        Duration::from_millis(59_950),
        Duration::from_millis(50),
    );
    assert!(session.state().is_playing());
    assert_eq!(session.state().remaining_seconds(), 1);

    session.pump(start + Duration::from_secs(60));
    assert!(session.state().is_finished());
    assert_eq!(session.state().remaining_seconds(), 0);
    assert!(!session.is_timer_running());
}

#[test]
fn test_fast_tick_interval() {
    let config = GameConfig {
        countdown_seconds: 10,
        tick_interval_ms: 100,
        ..Default::default()
    };
    let start = Instant::now();
    let mut session = session(config);
    session.start(start);
    assert_eq!(session.pump(start + Duration::from_millis(1000)), 10);
    assert!(session.state().is_finished());
}

#[test]
fn test_hand_built_stalling_config_still_finishes() {
    let config = GameConfig {
        countdown_seconds: 0,
        tick_interval_ms: 0,
        vocabulary: Vec::new(),
        ..Default::default()
    };
    let start = Instant::now();
    let mut session = session(config);
    session.start(start);
    assert!(session.state().current_word().is_some());
    assert_eq!(session.state().remaining_seconds(), 60);

    run_loop(
        &mut session,
        start,
        Duration::from_secs(61),
        Duration::from_millis(50),
    );
    assert!(session.state().is_finished());
    assert!(!session.is_timer_running());
}

#[test]
fn test_no_ticks_after_teardown() {
    let start = Instant::now();
    let mut session = session(GameConfig::default());
    let ticks = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&ticks);
    session
        .state_mut()
        .subscribe_remaining_seconds(move |_| *sink.borrow_mut() += 1);

    session.start(start);
    session.pump(start + Duration::from_secs(5));
    let before = *ticks.borrow();
    session.end();

    assert_eq!(session.pump(start + Duration::from_secs(30)), 0);
    assert_eq!(*ticks.borrow(), before);
    assert_eq!(session.state().remaining_seconds(), 55);
}

#[test]
fn test_play_again_after_results() {
    let config = GameConfig {
        countdown_seconds: 3,
        ..Default::default()
    };
    let start = Instant::now();
    let mut session = session(config);
    session.start(start);
    session.on_correct();
    session.on_correct();
    session.pump(start + Duration::from_secs(3));

    let summary = session.state().summary();
    assert_eq!(summary.final_score, 2);
    assert!(session.state_mut().acknowledge_finish());
    assert_eq!(session.state().phase(), GamePhase::Acknowledged);

    let again = start + Duration::from_secs(20);
    session.start(again);
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().phase(), GamePhase::Playing);
    assert_eq!(session.time_until_next_tick(again), Some(Duration::from_secs(1)));
}
