//! Terminal Blockfall runner (default binary).
//!
//! Owns the terminal session and the single reducer loop: every clock tick and
//! key press arrives through one [`EventStream`], is applied to the current
//! [`GameState`], and the result is redrawn.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::runtime::log_transition;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{Config, EventStream, GameEvent};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!(
        tick_interval_ms = config.tick_interval_ms,
        cell_width = config.cell_width,
        "blockfall starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    info!("blockfall stopped");
    result
}

/// Log to a file when `BLOCKFALL_LOG_PATH` is set; the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut events = EventStream::new()?;
    events.start_clock(config.tick_interval());
    events.start_terminal_input();

    let view = GameView::new(config.cell_width, 1);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut state = GameState::new();

    loop {
        state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match events.recv() {
            None | Some(GameEvent::Quit) => break,
            Some(GameEvent::Resize) => term.invalidate(),
            Some(GameEvent::Action(action)) => {
                let next = state.apply(action);
                log_transition(action, &state, &next);
                state = next;
            }
        }
    }

    events.shutdown();
    Ok(())
}
