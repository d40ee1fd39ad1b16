//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]s. There is no
//! key-repeat handling: every press event yields at most one action, and the
//! reducer applies it immediately.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
