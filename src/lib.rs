//! Falling-block puzzle engine: board, pieces, collision, rotation, line
//! clearing and the timed drop state machine. Rendering and input live in
//! the binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Game, StepOutcome};
