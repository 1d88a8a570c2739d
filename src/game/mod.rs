pub mod board;
pub mod piece;
pub mod shape;
pub mod source;
pub mod state;

pub use board::{Board, Cell, Grid};
pub use piece::{Piece, PieceType};
pub use shape::Shape;
pub use source::{PieceSource, RandomSource, SequenceSource};
pub use state::{Game, StepOutcome};
