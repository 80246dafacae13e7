//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. One board update and one frame per 16 ms tick.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::config::load_config;
use tui_2048::core::{Board, GameConfig, GameSnapshot, SimpleRng};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, GameState, TICK_MS};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Seed for tile spawns (defaults to the current time)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// JSON file with game tuning (move_speed, pop_duration, ...)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write log output to this file (the terminal is busy drawing the game)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!("starting with seed {seed}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(log::LevelFilter::Off);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let view = GameView::default();
    let mut board = Board::new(config.with_layout(view.layout()), SimpleRng::new(seed));
    let mut overlay = Overlay::None;

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let dt = TICK_MS as f32 / 1000.0;
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Move(direction)) => {
                            // Moves are ignored while an overlay covers the board.
                            if overlay == Overlay::None {
                                board.queue_move(direction);
                            }
                        }
                        Some(GameAction::NewGame) => {
                            board.request_new_game();
                            overlay = Overlay::None;
                        }
                        Some(GameAction::ToggleHelp) => {
                            overlay = if overlay == Overlay::Help {
                                Overlay::None
                            } else {
                                Overlay::Help
                            };
                        }
                        Some(GameAction::Dismiss) => {
                            if overlay == Overlay::None {
                                return Ok(());
                            }
                            overlay = Overlay::None;
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            board.update(dt);

            if board.state() == GameState::Win {
                overlay = Overlay::Won;
                board.continue_playing();
            }

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            snap.fill_from(&board);
            view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }
    }
}
