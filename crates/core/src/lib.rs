//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management of the
//! falling-block game. It has **no dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Can run behind a terminal, a GUI, or headless
//! - **Allocation-free**: Boards, shapes and pieces are fixed-size `Copy` values
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, the collision predicate, merging and line clearing
//! - [`pieces`]: The seven shape matrices, clockwise rotation, the falling piece
//! - [`rng`]: Uniform piece selection from a seeded source
//! - [`game_state`]: Board, falling piece, preview piece, score, game-over flag
//! - [`engine`]: The operations a shell drives (move, rotate, tick, render)
//! - [`builder`]: Starting a game from a preset position
//! - [`snapshot`]: The read-only render view
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Each spawn picks one of the 7 shapes with equal probability
//! - **Centered spawn**: `x = 5 - width / 2`, `y = 0`
//! - **Guarded rotation**: Clockwise in place; rejected if the turned shape would not fit
//! - **Single-step gravity**: A tick (or soft drop) moves down one row or lands the piece
//! - **Landing**: Merge, clear full rows, promote the preview piece, draw a new preview
//! - **Scoring**: One point per cleared row
//! - **Game over**: The promoted piece is blocked at its spawn position
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{GameEngine, Gravity};
//! use falling_blocks_core::types::GameAction;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.tick(), Gravity::Fell);
//!
//! let frame = game.render_state();
//! assert_eq!(frame.score, 0);
//! assert!(!frame.game_over);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The shell calls [`GameEngine::tick`] every
//! [`TICK_MS`](types::TICK_MS) milliseconds (5 times per second).

pub mod board;
pub mod builder;
pub mod engine;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use builder::EngineBuilder;
pub use engine::{GameEngine, Gravity};
pub use game_state::GameState;
pub use pieces::{get_shape, spawn_x, Piece, Shape};
pub use rng::{random_kind, seeded, spawn_piece, GameRng};
pub use snapshot::RenderState;
