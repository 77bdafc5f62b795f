use crate::board::Board;

/// Read-only view handed to the rendering shell.
///
/// `grid` is the board with the falling piece overlaid. The preview piece
/// never appears in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderState {
    pub grid: Board,
    pub score: u32,
    pub game_over: bool,
}
