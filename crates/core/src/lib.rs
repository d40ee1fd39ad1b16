//! Core game logic module - a pure, deterministic reducer
//!
//! This crate holds every rule of the game. It has **zero dependencies** on
//! terminals, clocks, threads or I/O:
//!
//! - **Deterministic**: the state after an action sequence depends only on
//!   that sequence; piece draws are seeded from in-game elapsed time
//! - **Immutable**: [`reduce`] maps a state and an action to a new state
//! - **Portable**: a terminal frontend, a test or a bot drives it the same way
//!
//! # Module Structure
//!
//! - [`board`]: locked cells, row counting, row removal and difficulty rows
//! - [`collision`]: piece/board overlap and placement checks
//! - [`game_state`]: the active piece, the game state and the reducer
//! - [`pieces`]: rotation tables with authored reach metrics
//! - [`rng`]: the time-seeded LCG piece sequencer
//! - [`snapshot`]: render-ready view of a state
//!
//! # Game Rules
//!
//! - A `Tick` moves the active piece down one row and advances game time by
//!   half a second; a landed piece locks instead
//! - Locking commits the piece, inserts a difficulty row every
//!   `max(15 - level, 2)` locks, clears full rows for 100 points each and
//!   spawns the next piece at (4, -1)
//! - Rotations and holds that would leave the board or overlap are rejected
//! - The game ends when a piece locks above the board or a new piece spawns
//!   onto locked cells; only `Reset` leaves the ended state
//!
//! # Example
//!
//! ```
//! use blockfall_core::{reduce, GameState};
//! use blockfall_types::GameAction;
//!
//! let game = GameState::new();
//! let game = reduce(game, GameAction::MoveRight);
//! let game = reduce(game, GameAction::Tick);
//!
//! assert_eq!(game.active().x, 5);
//! assert_eq!(game.elapsed_half_secs(), 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockedCell};
pub use game_state::{difficulty_interval, level_for_score, reduce, ActivePiece, GamePhase, GameState};
pub use pieces::{cells_at, get_rotation, get_shape, preview_cells, RotationState};
pub use rng::{difficulty_hole, draw_piece, next_seed, value_at};
pub use snapshot::{format_elapsed, GameSnapshot};
