//! Terminal front-end for the falling-blocks game.
//!
//! Renders a `core::RenderState` into a framebuffer of styled cells, then
//! flushes only the changed runs to the terminal through crossterm.
//!
//! - `fb`: cells, styles, and the framebuffer itself
//! - `game_view`: pure layout of board, score panel, and the GAME OVER overlay
//! - `renderer`: raw mode, alternate screen, diff encoding

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
