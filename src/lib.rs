//! Falling Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one `falling_blocks::{core,input,term,types}`
//! path and carries the binary's runtime configuration.

pub mod config;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;

pub use config::GameConfig;
