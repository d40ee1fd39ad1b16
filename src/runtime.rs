//! Event runtime.
//!
//! Bridges the synchronous game loop with a small tokio runtime. Clock ticks
//! and terminal input are produced by separate tasks and merged into one
//! unbounded channel; the game loop drains it in arrival order and applies
//! each action to completion before taking the next.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::GameState;
use crate::input::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Item of the merged event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Action(GameAction),
    /// Terminal size changed; redraw everything.
    Resize,
    Quit,
}

/// Map a raw terminal event onto a game event.
pub fn translate_event(event: Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if should_quit(key) {
                Some(GameEvent::Quit)
            } else {
                handle_key_event(key).map(GameEvent::Action)
            }
        }
        Event::Resize(_, _) => Some(GameEvent::Resize),
        _ => None,
    }
}

/// Send a `Tick` every `period` until the receiver goes away.
///
/// The first tick fires one full period after the call.
pub async fn run_clock(period: Duration, tx: mpsc::UnboundedSender<GameEvent>) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if tx.send(GameEvent::Action(GameAction::Tick)).is_err() {
            debug!("clock stopped: receiver closed");
            return;
        }
    }
}

/// Blocking reader for terminal events. Ends after a quit key or a read error.
fn read_terminal_events(tx: mpsc::UnboundedSender<GameEvent>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "terminal input failed");
                let _ = tx.send(GameEvent::Quit);
                return;
            }
        };
        let Some(game_event) = translate_event(event) else {
            continue;
        };
        if tx.send(game_event).is_err() || game_event == GameEvent::Quit {
            return;
        }
    }
}

/// Merged clock + input stream backed by its own runtime.
pub struct EventStream {
    rt: Runtime,
    tx: mpsc::UnboundedSender<GameEvent>,
    rx: mpsc::UnboundedReceiver<GameEvent>,
}

impl EventStream {
    pub fn new() -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("blockfall-events")
            .enable_time()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self { rt, tx, rx })
    }

    pub fn start_clock(&self, period: Duration) {
        self.rt.spawn(run_clock(period, self.tx.clone()));
    }

    pub fn start_terminal_input(&self) {
        let tx = self.tx.clone();
        self.rt.spawn_blocking(move || read_terminal_events(tx));
    }

    /// Block until the next event.
    pub fn recv(&mut self) -> Option<GameEvent> {
        self.rx.blocking_recv()
    }

    /// Stop producers without waiting for the blocking input reader.
    pub fn shutdown(self) {
        self.rt.shutdown_background();
    }
}

/// A notable change between two consecutive states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Locked { pieces_locked: u32 },
    RowsCleared { rows: u32, score: u32 },
    LevelUp { level: u32 },
    GameOver { score: u32, high_score: u32 },
    Restarted,
}

/// List what changed when `action` took `before` to `after`.
pub fn describe_transition(action: GameAction, before: &GameState, after: &GameState) -> Vec<Transition> {
    let mut out = Vec::new();
    if action == GameAction::Reset {
        out.push(Transition::Restarted);
        return out;
    }
    if after.pieces_locked() > before.pieces_locked() {
        out.push(Transition::Locked {
            pieces_locked: after.pieces_locked(),
        });
    }
    if after.score() > before.score() {
        out.push(Transition::RowsCleared {
            rows: (after.score() - before.score()) / crate::types::ROW_CLEAR_SCORE,
            score: after.score(),
        });
    }
    if after.level() > before.level() {
        out.push(Transition::LevelUp {
            level: after.level(),
        });
    }
    if after.ended() && !before.ended() {
        out.push(Transition::GameOver {
            score: after.score(),
            high_score: after.high_score(),
        });
    }
    out
}

/// Emit tracing events for the transitions of one step.
pub fn log_transition(action: GameAction, before: &GameState, after: &GameState) {
    for t in describe_transition(action, before, after) {
        match t {
            Transition::Locked { pieces_locked } => debug!(pieces_locked, "piece locked"),
            Transition::RowsCleared { rows, score } => debug!(rows, score, "rows cleared"),
            Transition::LevelUp { level } => debug!(level, "level up"),
            Transition::GameOver { score, high_score } => {
                info!(
                    score,
                    high_score,
                    elapsed_half_secs = after.elapsed_half_secs(),
                    "game over"
                )
            }
            Transition::Restarted => info!("game restarted"),
        }
    }
}
