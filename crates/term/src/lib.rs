//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Instead of a
//! widget toolkit it draws into a plain framebuffer that is diffed and flushed
//! to the terminal with crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from a `GameSnapshot` to a framebuffer
//! - [`renderer`]: raw-mode terminal session and diff encoding

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
