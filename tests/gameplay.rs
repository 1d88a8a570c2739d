//! Gameplay scenarios driven through the public `Game` API

use std::time::Duration;

use blockfall::constants::{COLS, ROWS};
use blockfall::game::{Board, Game, Piece, PieceType, SequenceSource, StepOutcome};
use blockfall::GameConfig;

fn game_with(pieces: &[PieceType]) -> Game<SequenceSource> {
    Game::with_source(SequenceSource::new(pieces.to_vec()), &GameConfig::default())
}

#[test]
fn test_o_piece_spawn_is_valid_on_empty_board() {
    let game = game_with(&[PieceType::O]);
    let piece = game.active_piece();
    assert_eq!((piece.x, piece.y), (4, 0));
    assert!(game.board.is_valid_placement(&piece.shape, piece.x, piece.y));
}

#[test]
fn test_i_piece_spawn_blocked_by_top_row_triggers_reset() {
    let mut board = Board::new();
    for col in 3..7 {
        board.set(0, col, 2);
    }
    let i = Piece::new(PieceType::I);
    assert_eq!((i.x, i.y), (3, 0));
    assert!(!board.is_valid_placement(&i.shape, i.x, i.y));

    let mut game = game_with(&[PieceType::O, PieceType::I, PieceType::O]);
    game.board = board;
    assert_eq!(game.hard_drop(), StepOutcome::GameOver);
    assert_eq!(game.games_over(), 1);
    assert!(game.board_snapshot().iter().flatten().all(|&c| c == 0));
    assert_eq!(game.active_piece().piece_type, PieceType::O);
}

#[test]
fn test_piece_on_bottom_row_locks_in_place() {
    let mut game = game_with(&[PieceType::I, PieceType::T]);
    game.current_piece.x = 0;
    game.current_piece.y = (ROWS - 1) as i32;

    assert_eq!(game.soft_drop(), StepOutcome::Locked { lines_cleared: 0 });
    let grid = game.board_snapshot();
    for col in 0..4 {
        assert_eq!(grid[ROWS - 1][col], PieceType::I.color());
    }
    assert_eq!(game.board.filled_count(), 4);
    assert_eq!(game.active_piece().piece_type, PieceType::T);
}

#[test]
fn test_rotation_at_left_wall_keeps_orientation() {
    let mut game = game_with(&[PieceType::J]);
    let turned = PieceType::J.shape().rotate_clockwise();
    game.current_piece.shape = turned.clone();
    game.current_piece.x = -1;
    game.current_piece.y = 10;

    assert!(!game.rotate());
    assert_eq!(game.active_piece().shape, turned);
    assert_eq!((game.active_piece().x, game.active_piece().y), (-1, 10));
}

#[test]
fn test_rotation_does_not_touch_next_piece_of_same_type() {
    let mut game = game_with(&[PieceType::L]);
    game.current_piece.y = 5;
    assert!(game.rotate());
    game.hard_drop();
    assert_eq!(game.active_piece().shape, PieceType::L.shape());
}

#[test]
fn test_filling_two_rows_clears_both() {
    let mut game = game_with(&[PieceType::O, PieceType::O, PieceType::O, PieceType::O, PieceType::O]);

    // Four O pieces side by side leave a 2-wide gap at the right
    for target in [0, 2, 4, 6] {
        while game.current_piece.x > target {
            game.move_left();
        }
        while game.current_piece.x < target {
            game.move_right();
        }
        assert_eq!(game.hard_drop(), StepOutcome::Locked { lines_cleared: 0 });
    }

    while game.move_right() {}
    assert_eq!(game.current_piece.x, (COLS - 2) as i32);
    assert_eq!(game.hard_drop(), StepOutcome::Locked { lines_cleared: 2 });
    assert_eq!(game.board.filled_count(), 0);
    assert_eq!(game.lines_cleared(), 2);
}

#[test]
fn test_ticks_drive_piece_to_lock() {
    let mut game = game_with(&[PieceType::O, PieceType::S]);
    let step = Duration::from_millis(1000);

    let mut outcomes = Vec::new();
    for _ in 0..ROWS - 1 {
        outcomes.push(game.tick(step));
    }

    assert!(outcomes[..ROWS - 2].iter().all(|o| *o == Some(StepOutcome::Moved)));
    assert_eq!(outcomes[ROWS - 2], Some(StepOutcome::Locked { lines_cleared: 0 }));
    assert_eq!(game.active_piece().piece_type, PieceType::S);
}

#[test]
fn test_fast_drop_flag_controls_tick_rate() {
    let mut game = game_with(&[PieceType::T]);
    let frame = Duration::from_millis(16);

    game.set_fast_dropping(true);
    let steps = (0..32).filter_map(|_| game.tick(frame)).count();
    assert!(steps >= 8, "expected frequent drops, got {}", steps);

    game.set_fast_dropping(false);
    let y = game.current_piece.y;
    for _ in 0..32 {
        game.tick(frame);
    }
    assert_eq!(game.current_piece.y, y);
}

#[test]
fn test_independent_games_do_not_share_state() {
    let mut a = game_with(&[PieceType::I]);
    let b = game_with(&[PieceType::I]);
    a.hard_drop();
    assert_eq!(b.board.filled_count(), 0);
    assert_eq!(b.active_piece().y, 0);
}

#[test]
fn test_seeded_games_repeat_sequence() {
    let config = GameConfig { seed: Some(99), ..GameConfig::default() };
    let mut a = Game::new(&config);
    let mut b = Game::new(&config);
    for _ in 0..20 {
        assert_eq!(a.active_piece().piece_type, b.active_piece().piece_type);
        a.hard_drop();
        b.hard_drop();
    }
}
