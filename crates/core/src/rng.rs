//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven catalog shapes with equal probability.
//! The engine owns its random source; nothing here touches a global or
//! thread-local generator, so a seed fully determines the piece sequence.

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::pieces::Piece;
use crate::types::PieceKind;

/// The default random source of a game
pub type GameRng = ChaCha8Rng;

/// Create the default random source from a seed
pub fn seeded(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Pick a catalog entry uniformly at random
pub fn random_kind<R: Rng>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

/// A fresh piece of a uniformly random kind at its spawn position
pub fn spawn_piece<R: Rng>(rng: &mut R) -> Piece {
    Piece::spawn(random_kind(rng))
}
