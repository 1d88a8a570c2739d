//! Where the next piece comes from.
//!
//! `Game` asks a [`PieceSource`] for each spawn, so tests can script the
//! sequence while real play draws uniformly at random.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::piece::PieceType;

pub trait PieceSource {
    fn next_piece(&mut self) -> PieceType;
}

/// Uniform pick over the seven piece types.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for RandomSource {
    fn next_piece(&mut self) -> PieceType {
        PieceType::ALL[self.rng.gen_range(0..PieceType::ALL.len())]
    }
}

/// Replays a fixed list of piece types, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    pieces: Vec<PieceType>,
    index: usize,
}

impl SequenceSource {
    pub fn new(pieces: Vec<PieceType>) -> Self {
        assert!(!pieces.is_empty(), "sequence must contain at least one piece");
        Self { pieces, index: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_piece(&mut self) -> PieceType {
        let piece = self.pieces[self.index];
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }
}
