//! Blockfall (workspace facade crate).
//!
//! Re-exports the game crates under short paths (`blockfall::{core, input,
//! term, types}`) and hosts the pieces that glue them into a playable
//! terminal game: environment [`config`] and the event [`runtime`].

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod runtime;

pub use config::Config;
pub use runtime::{describe_transition, EventStream, GameEvent, Transition};
