use std::time::Duration;

use crate::config::GameConfig;
use crate::game::board::{Board, Grid};
use crate::game::piece::Piece;
use crate::game::source::{PieceSource, RandomSource};

/// Result of a downward step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The piece fell one row.
    Moved,
    /// The piece locked and the next one spawned.
    Locked { lines_cleared: usize },
    /// The piece locked but the next one had no room: the board was cleared
    /// and play continues with a fresh piece.
    GameOver,
}

/// One independent game: board, active piece and drop clock.
///
/// Every command runs to completion before returning, so a caller reading
/// `board` and `current_piece` between commands never sees a locked piece
/// that has not been merged and cleared yet.
pub struct Game<S: PieceSource = RandomSource> {
    pub board: Board,
    pub current_piece: Piece,
    source: S,
    drop_interval: Duration,
    fast_drop_interval: Duration,
    drop_elapsed: Duration,
    fast_dropping: bool,
    lines_cleared: usize,
    games_over: u32,
}

impl Game<RandomSource> {
    pub fn new(config: &GameConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        };
        Self::with_source(source, config)
    }
}

impl<S: PieceSource> Game<S> {
    pub fn with_source(mut source: S, config: &GameConfig) -> Self {
        let first = Piece::new(source.next_piece());
        Self {
            board: Board::new(),
            current_piece: first,
            source,
            drop_interval: config.drop_interval,
            fast_drop_interval: config.fast_drop_interval,
            drop_elapsed: Duration::ZERO,
            fast_dropping: false,
            lines_cleared: 0,
            games_over: 0,
        }
    }

    pub fn board_snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    pub fn active_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    /// How many times a spawn found no room and the board was reset.
    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn is_fast_dropping(&self) -> bool {
        self.fast_dropping
    }

    pub fn set_fast_dropping(&mut self, fast: bool) {
        self.fast_dropping = fast;
    }

    pub fn drop_interval(&self) -> Duration {
        if self.fast_dropping {
            self.fast_drop_interval
        } else {
            self.drop_interval
        }
    }

    fn fits(&self, x: i32, y: i32) -> bool {
        self.board.is_valid_placement(&self.current_piece.shape, x, y)
    }

    fn shift(&mut self, dx: i32) -> bool {
        let x = self.current_piece.x + dx;
        if self.fits(x, self.current_piece.y) {
            self.current_piece.x = x;
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Rotates clockwise in place; an obstructed rotation is discarded.
    pub fn rotate(&mut self) -> bool {
        let rotated = self.current_piece.shape.rotate_clockwise();
        let piece = &self.current_piece;
        if self.board.is_valid_placement(&rotated, piece.x, piece.y) {
            self.current_piece.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Moves down one row, or locks the piece if it cannot move.
    pub fn soft_drop(&mut self) -> StepOutcome {
        let y = self.current_piece.y + 1;
        if self.fits(self.current_piece.x, y) {
            self.current_piece.y = y;
            StepOutcome::Moved
        } else {
            self.lock_piece()
        }
    }

    pub fn hard_drop(&mut self) -> StepOutcome {
        while self.fits(self.current_piece.x, self.current_piece.y + 1) {
            self.current_piece.y += 1;
        }
        self.lock_piece()
    }

    /// Advances the drop clock. Returns the step taken once the current
    /// interval has elapsed, `None` otherwise.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepOutcome> {
        self.drop_elapsed += elapsed;
        if self.drop_elapsed < self.drop_interval() {
            return None;
        }
        self.drop_elapsed = Duration::ZERO;
        Some(self.soft_drop())
    }

    fn lock_piece(&mut self) -> StepOutcome {
        let piece = &self.current_piece;
        self.board.merge(&piece.shape, piece.color, piece.x, piece.y);

        let lines = self.board.clear_full_rows();
        self.lines_cleared += lines;
        self.drop_elapsed = Duration::ZERO;

        if self.spawn_piece() {
            StepOutcome::Locked { lines_cleared: lines }
        } else {
            StepOutcome::GameOver
        }
    }

    /// Spawns the next piece. When it does not fit, the board is cleared and
    /// another piece is drawn; returns false in that case.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::new(self.source.next_piece());
        if self.board.is_valid_placement(&piece.shape, piece.x, piece.y) {
            self.current_piece = piece;
            return true;
        }

        self.games_over += 1;
        self.board.reset();
        self.current_piece = Piece::new(self.source.next_piece());
        false
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.drop_elapsed = Duration::ZERO;
        self.fast_dropping = false;
        self.lines_cleared = 0;
        self.games_over = 0;
        self.current_piece = Piece::new(self.source.next_piece());
    }
}
