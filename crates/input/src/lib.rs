//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Every key
//! press becomes at most one action; there is no auto-repeat handling, so a
//! held key moves the piece at the terminal's own repeat rate.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit};
