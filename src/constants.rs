pub const COLS: usize = 10;
pub const ROWS: usize = 20;

// Number of distinct piece types; color ids run 1..=PIECE_COUNT
pub const PIECE_COUNT: usize = 7;

// Drop intervals (in milliseconds)
pub const NORMAL_DROP_MS: u64 = 1000;
pub const FAST_DROP_MS: u64 = 50;

pub const KEY_TIMEOUT: u64 = 100; // Timeout for key release detection fallback
pub const GAME_OVER_NOTICE_MS: u64 = 1500;
