//! Creation of [`GameEngine`]s from a preset position.

use rand::Rng;

use crate::board::Board;
use crate::engine::GameEngine;
use crate::pieces::Piece;
use crate::rng::{self, GameRng};

/// Configures a new [`GameEngine`] before it starts.
///
/// Call [`EngineBuilder::new`] or [`GameEngine::builder`], chain setters, then
/// [`EngineBuilder::build`]. The builder is not used up, so one preset can
/// start several games.
///
/// Pieces left unset are drawn from the random source, current first. If the
/// starting piece is already blocked the engine starts in the game-over state.
///
/// ```
/// use falling_blocks_core::{Board, GameEngine, Piece};
/// use falling_blocks_core::types::PieceKind;
///
/// let engine = GameEngine::builder()
///     .seed(42)
///     .board(Board::from_rows(&["#########."]).unwrap())
///     .current(Piece::spawn(PieceKind::I))
///     .build();
/// assert_eq!(engine.current().kind, PieceKind::I);
/// assert!(!engine.is_game_over());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineBuilder {
    /// The value to seed the game's RNG with; random when unset.
    pub seed: Option<u64>,
    /// The starting board.
    pub board: Board,
    /// The falling piece at the start.
    pub current: Option<Piece>,
    /// The preview piece at the start.
    pub next: Option<Piece>,
}

impl EngineBuilder {
    /// A blank template: empty board, random seed, random pieces.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn board(&mut self, board: Board) -> &mut Self {
        self.board = board;
        self
    }

    pub fn current(&mut self, piece: Piece) -> &mut Self {
        self.current = Some(piece);
        self
    }

    pub fn next(&mut self, piece: Piece) -> &mut Self {
        self.next = Some(piece);
        self
    }

    /// Create a [`GameEngine`] drawing from the default seeded source.
    pub fn build(&self) -> GameEngine<GameRng> {
        let seed = self.seed.unwrap_or_else(rand::random);
        self.build_with_rng(rng::seeded(seed))
    }

    /// Create a [`GameEngine`] drawing from an injected random source.
    /// The configured seed is ignored.
    pub fn build_with_rng<R: Rng>(&self, mut rng: R) -> GameEngine<R> {
        let current = self.current.unwrap_or_else(|| rng::spawn_piece(&mut rng));
        let next = self.next.unwrap_or_else(|| rng::spawn_piece(&mut rng));
        GameEngine::from_parts(self.board, current, next, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_seeded_builds_repeat() {
        let mut builder = EngineBuilder::new();
        builder.seed(9);
        let a = builder.build();
        let b = builder.build();
        assert_eq!(a.current(), b.current());
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn test_matches_engine_new_for_same_seed() {
        let built = EngineBuilder::new().seed(77).build();
        let plain = GameEngine::new(77);
        assert_eq!(built.current(), plain.current());
        assert_eq!(built.next(), plain.next());
    }

    #[test]
    fn test_explicit_pieces_are_kept() {
        let engine = EngineBuilder::new()
            .current(Piece::at(PieceKind::L, 1, 3))
            .next(Piece::spawn(PieceKind::Z))
            .build();
        assert_eq!(engine.current(), Piece::at(PieceKind::L, 1, 3));
        assert_eq!(engine.next().kind, PieceKind::Z);
    }

    #[test]
    fn test_blocked_start_is_game_over() {
        let mut board = Board::new();
        board.set(4, 0, crate::types::Cell::Filled);
        let engine = EngineBuilder::new()
            .board(board)
            .current(Piece::spawn(PieceKind::O))
            .build();
        assert!(engine.is_game_over());
    }
}
