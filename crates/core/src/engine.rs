//! Game engine - the operations the shell drives
//!
//! [`GameEngine`] wraps a [`GameState`] together with its random source.
//! Every mutator short-circuits once the game is over, and every placement
//! decision routes through [`GameState::collision`].

use rand::Rng;

use crate::board::Board;
use crate::builder::EngineBuilder;
use crate::game_state::GameState;
use crate::pieces::{Piece, Shape};
use crate::rng::{self, GameRng};
use crate::snapshot::RenderState;
use crate::types::GameAction;

/// What one gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// The piece moved down one row.
    Fell,
    /// The piece could not fall: it was merged, full rows were cleared and
    /// the preview piece was promoted. Check [`GameEngine::is_game_over`]
    /// to learn whether the promoted piece fit.
    Landed { lines_cleared: usize },
    /// The game is over; nothing changed.
    Halted,
}

/// Falling-block game engine
#[derive(Debug, Clone)]
pub struct GameEngine<R = GameRng> {
    state: GameState,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Start a game on an empty board, drawing pieces from a seeded source
    pub fn new(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }

    /// Configure a game before starting it
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Start a game on an empty board with an injected random source
    pub fn with_rng(mut rng: R) -> Self {
        let current = rng::spawn_piece(&mut rng);
        let next = rng::spawn_piece(&mut rng);
        Self::from_parts(Board::new(), current, next, rng)
    }

    /// Assemble an engine; a `current` piece that is already blocked
    /// produces an engine that starts in the game-over state.
    pub(crate) fn from_parts(board: Board, current: Piece, next: Piece, rng: R) -> Self {
        let mut state = GameState::new(board, current, next);
        if state.current_collides() {
            log::info!("start position blocked; game over before the first move");
            state.end();
        }
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current(&self) -> Piece {
        self.state.current()
    }

    pub fn next(&self) -> Piece {
        self.state.next()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Draw a fresh piece from the catalog, positioned for spawning
    pub fn spawn_piece(&mut self) -> Piece {
        rng::spawn_piece(&mut self.rng)
    }

    /// See [`GameState::collision`]
    pub fn collision(&self, shape: &Shape, offset_x: i8, offset_y: i8) -> bool {
        self.state.collision(shape, offset_x, offset_y)
    }

    /// Shift the falling piece horizontally by `dx` if the target is free.
    /// Returns whether the piece moved.
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        let candidate = self.current().shifted(dx, 0);
        if self.collision(&candidate.shape, candidate.x, candidate.y) {
            return false;
        }
        self.state.set_current(candidate);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    /// Turn the falling piece 90° clockwise in place, unless the turned
    /// shape would overlap the board or leave it. Returns whether it turned.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let candidate = self.current().rotated();
        if self.collision(&candidate.shape, candidate.x, candidate.y) {
            return false;
        }
        self.state.set_current(candidate);
        true
    }

    /// Move the falling piece down one row, or land it.
    ///
    /// Landing merges the piece, clears full rows, promotes the preview
    /// piece and draws a new one. A promoted piece that is blocked at its
    /// spawn position ends the game.
    pub fn advance_gravity(&mut self) -> Gravity {
        if self.is_game_over() {
            return Gravity::Halted;
        }

        let current = self.current();
        if !self.collision(&current.shape, current.x, current.y + 1) {
            self.state.set_current(current.shifted(0, 1));
            return Gravity::Fell;
        }

        self.state.merge();
        let lines_cleared = self.state.clear_lines();
        if lines_cleared > 0 {
            log::debug!(
                "cleared {} row(s), score {}",
                lines_cleared,
                self.state.score()
            );
        }

        let next = rng::spawn_piece(&mut self.rng);
        if !self.state.promote(next) {
            log::info!(
                "{} piece blocked at spawn; game over with score {}",
                self.current().kind.as_str(),
                self.state.score()
            );
        }

        Gravity::Landed { lines_cleared }
    }

    /// Player-requested drop: identical to one gravity step
    pub fn soft_drop(&mut self) -> Gravity {
        self.advance_gravity()
    }

    /// Periodic gravity, called by the shell's timer
    pub fn tick(&mut self) -> Gravity {
        self.advance_gravity()
    }

    /// Apply a player action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop() != Gravity::Halted,
        }
    }

    /// Board with the falling piece overlaid; never mutates the engine.
    pub fn render_snapshot(&self) -> Board {
        self.state.render_snapshot()
    }

    /// Everything the shell needs to draw a frame
    pub fn render_state(&self) -> RenderState {
        self.state.render_state()
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
