mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use guess_the_word::logging;
use guess_the_word::{
    Buzz, GameConfig, GamePhase, GameSession, ScoreSummary, BUZZ_DISPLAY_MS, INPUT_POLL_MS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

enum Screen {
    Game,
    Score(ScoreSummary),
}

/// What a key press means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Correct,
    Skip,
    PlayAgain,
    Quit,
}

fn key_action(in_game: bool, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') if in_game => Some(Action::Correct),
        KeyCode::Char('s') | KeyCode::Char('S') if in_game => Some(Action::Skip),
        KeyCode::Enter if !in_game => Some(Action::PlayAgain),
        _ => None,
    }
}

/// A raised buzz is shown for `BUZZ_DISPLAY_MS`, then cleared.
fn buzz_expired(raised_at: Option<Instant>, now: Instant) -> bool {
    raised_at.is_some_and(|at| {
        now.saturating_duration_since(at) >= Duration::from_millis(BUZZ_DISPLAY_MS)
    })
}

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Guess the Word - act out the word before time runs out\n");
    println!("Usage: guess-the-word [options]\n");
    println!("Options:");
    println!("  --config <path>  Read settings from a JSON file");
    println!("  --seed <n>       Fixed word order for this run");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or("--config needs a path")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--seed" | "-s" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                parsed.seed = Some(seed);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(parsed)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--version") | Some("-v") => {
            println!("guess-the-word {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Some("--help") | Some("-h") => {
            print_help();
            std::process::exit(0);
        }
        _ => {}
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'guess-the-word --help' for usage.");
            std::process::exit(1);
        }
    };

    match logging::default_log_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init_file_logging(&dir) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let mut config = match GameConfig::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load config");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?config.seed, "starting");
    let mut session = GameSession::new(config, rng);

    // Observers only flag what changed; the loop below reacts.
    let dirty = Rc::new(Cell::new(true));
    let finished = Rc::new(Cell::new(false));
    let buzz_raised_at = Rc::new(Cell::new(None));
    {
        let state = session.state_mut();
        let d = Rc::clone(&dirty);
        state.subscribe_word(move |_| d.set(true));
        let d = Rc::clone(&dirty);
        state.subscribe_score(move |_| d.set(true));
        let d = Rc::clone(&dirty);
        state.subscribe_remaining_seconds(move |_| d.set(true));
        let d = Rc::clone(&dirty);
        let raised = Rc::clone(&buzz_raised_at);
        state.subscribe_buzz(move |buzz: &Buzz| {
            if *buzz == Buzz::NoBuzz {
                raised.set(None);
            } else {
                debug!(?buzz, pattern = ?buzz.pattern_ms(), "buzz");
                raised.set(Some(Instant::now()));
            }
            d.set(true);
        });
        let d = Rc::clone(&dirty);
        let f = Rc::clone(&finished);
        state.subscribe_phase(move |phase| {
            if *phase == GamePhase::JustFinished {
                f.set(true);
            }
            d.set(true);
        });
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    session.start(Instant::now());
    let result = run(
        &mut terminal,
        &mut session,
        &dirty,
        &finished,
        &buzz_raised_at,
    );
    session.end();

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession<StdRng>,
    dirty: &Cell<bool>,
    finished: &Cell<bool>,
    buzz_raised_at: &Cell<Option<Instant>>,
) -> io::Result<()> {
    let poll_cap = Duration::from_millis(INPUT_POLL_MS);
    let mut screen = Screen::Game;

    loop {
        if dirty.replace(false) {
            terminal.draw(|frame| {
                let area = frame.size();
                match &screen {
                    Screen::Game => ui::render_game_scene(frame, area, session.state()),
                    Screen::Score(summary) => ui::render_score_scene(frame, area, summary),
                }
            })?;
        }

        let timeout = session
            .time_until_next_tick(Instant::now())
            .map_or(poll_cap, |d| d.min(poll_cap));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    let in_game = matches!(screen, Screen::Game);
                    match key_action(in_game, key_event.code) {
                        Some(Action::Quit) => break,
                        Some(Action::Correct) => {
                            session.on_correct();
                        }
                        Some(Action::Skip) => {
                            session.on_skip();
                        }
                        Some(Action::PlayAgain) => {
                            session.start(Instant::now());
                            screen = Screen::Game;
                            dirty.set(true);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }

        let now = Instant::now();
        session.pump(now);
        // Panic is raised again on every tick, so it pulses once per second.
        if buzz_expired(buzz_raised_at.get(), now) {
            session.state_mut().acknowledge_buzz();
        }

        if finished.replace(false) {
            let summary = session.state().summary();
            session.state_mut().acknowledge_finish();
            info!(score = summary.final_score, "showing results");
            screen = Screen::Score(summary);
            dirty.set(true);
        }
    }

    Ok(())
}
