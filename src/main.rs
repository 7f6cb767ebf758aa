mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use aybuben::config::{Cli, FRAME};
use aybuben::engine::{Command, Engine};
use aybuben::entities::GameStatus;
use aybuben::error::AppError;
use aybuben::input::command_for_key;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs go to a file.
fn init_tracing(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Subscriber(e.to_string()))?;

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

// ── Start screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    engine: &Engine,
) -> Result<MenuResult, AppError> {
    display::render_start_screen(out, engine.state())?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                match code {
                    KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
                        return Ok(MenuResult::Start);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(MenuResult::Quit);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(MenuResult::Quit);
                    }
                    _ => {}
                }
            }
            Ok(Event::Resize(..)) => display::render_start_screen(out, engine.state())?,
            Ok(_) => {}
            // Input thread is gone; nothing more can arrive.
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Front-end aliases on top of the arrow keys the engine understands.
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') => KeyCode::Left,
        KeyCode::Char('d') | KeyCode::Char('D') => KeyCode::Right,
        KeyCode::Char('w') | KeyCode::Char('W') => KeyCode::Up,
        other => other,
    }
}

/// Returns `true` → quit program,  `false` → back to the start screen.
///
/// Key presses are applied the moment they arrive; ticks fire on a fixed
/// cadence. Both go through the same engine, one after the other.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut Engine,
    rx: &mpsc::Receiver<Event>,
    tick_interval: Duration,
) -> Result<bool, AppError> {
    let started = Instant::now();
    let mut next_tick = started + tick_interval;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            // Browsers repeat keydown while held; do the same here.
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('r') | KeyCode::Char('R')
                    if engine.state().status() == GameStatus::Won =>
                {
                    engine.reset();
                    return Ok(false);
                }
                _ => {
                    if let Some(command) = command_for_key(normalize_key(code)) {
                        engine.apply(command);
                    }
                }
            }
        }

        // ── Fixed-rate ticks; catch up if a frame ran long ────────────────────
        while engine.state().is_playing && Instant::now() >= next_tick {
            let elapsed_ms = next_tick.duration_since(started).as_millis() as u64;
            engine.apply(Command::Tick { elapsed_ms });
            next_tick += tick_interval;
        }

        display::render(out, engine.state())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_path())?;
    info!(?cli, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!(error = %e, "input reader stopped");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &cli);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, cli: &Cli) -> Result<(), AppError> {
    let tuning = cli.tuning();
    let mut engine = match cli.seed {
        Some(seed) => Engine::seeded(tuning, seed),
        None => Engine::from_entropy(tuning),
    };

    loop {
        match show_menu(out, rx, &engine)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                engine.start(cli.level);
                if game_loop(out, &mut engine, rx, cli.tick_interval())? {
                    break;
                }
                // Otherwise loop back to the start screen
            }
        }
    }
    info!(score = engine.state().score, "bye");
    Ok(())
}
