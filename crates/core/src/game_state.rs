//! Game state module - the data a session owns and the rules that read or
//! rewrite it without randomness
//!
//! [`GameState`] holds the board, the falling piece, the preview piece, the
//! score and the terminal flag. Collision, merge, line clearing and the
//! render overlay live here; spawning and input handling live on
//! [`GameEngine`](crate::engine::GameEngine), which owns the random source.

use crate::board::Board;
use crate::pieces::{Piece, Shape};
use crate::snapshot::RenderState;
use crate::types::Cell;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub(crate) fn new(board: Board, current: Piece, next: Piece) -> Self {
        Self {
            board,
            current,
            next,
            score: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The single placement predicate: does `shape` at (`offset_x`, `offset_y`)
    /// leave the board or overlap a filled cell?
    pub fn collision(&self, shape: &Shape, offset_x: i8, offset_y: i8) -> bool {
        self.board.collides(shape, offset_x, offset_y)
    }

    /// Does the falling piece overlap anything where it stands?
    pub fn current_collides(&self) -> bool {
        self.collision(&self.current.shape, self.current.x, self.current.y)
    }

    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// Promote the preview piece and queue `next` behind it.
    ///
    /// Sets `game_over` when the promoted piece is blocked at its spawn
    /// position. Returns whether the game is still running.
    pub(crate) fn promote(&mut self, next: Piece) -> bool {
        self.current = std::mem::replace(&mut self.next, next);
        if self.current_collides() {
            self.game_over = true;
        }
        !self.game_over
    }

    pub(crate) fn end(&mut self) {
        self.game_over = true;
    }

    /// Commit the falling piece's cells into the board.
    /// Returns the number of cells written.
    pub(crate) fn merge(&mut self) -> usize {
        self.board.merge_piece(&self.current)
    }

    /// Remove every full row, add the count to the score and return it.
    pub(crate) fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows().len();
        self.score += cleared as u32;
        cleared
    }

    /// Copy of the board with the falling piece overlaid.
    pub fn render_snapshot(&self) -> Board {
        let mut grid = self.board;
        for (x, y) in self.current.cells() {
            grid.set(x, y, Cell::Filled);
        }
        grid
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            grid: self.render_snapshot(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}
