use std::time::{Duration, Instant};
use crossterm::event::{KeyCode, KeyEventKind};

use blockfall::constants::KEY_TIMEOUT;
use blockfall::game::{Game, PieceSource, StepOutcome};

/// Tracks the held down key that drives fast dropping.
pub struct InputState {
    pub down_pressed: bool,
    pub last_update: Instant,
    pub keyboard_enhancement_active: bool,
}

impl InputState {
    pub fn new(keyboard_enhancement_active: bool) -> Self {
        Self {
            down_pressed: false,
            last_update: Instant::now(),
            keyboard_enhancement_active,
        }
    }

    fn press_down<S: PieceSource>(&mut self, game: &mut Game<S>) {
        self.down_pressed = true;
        self.last_update = Instant::now();
        game.set_fast_dropping(true);
    }

    fn release_down<S: PieceSource>(&mut self, game: &mut Game<S>) {
        self.down_pressed = false;
        game.set_fast_dropping(false);
    }

    /// Without key release events, treat the down key as released once the
    /// terminal stops repeating it.
    pub fn check_timeouts<S: PieceSource>(&mut self, game: &mut Game<S>) {
        if !self.keyboard_enhancement_active
            && self.down_pressed
            && self.last_update.elapsed() > Duration::from_millis(KEY_TIMEOUT)
        {
            self.release_down(game);
        }
    }
}

pub fn handle_input<S: PieceSource>(
    game: &mut Game<S>,
    input: &mut InputState,
    key_code: KeyCode,
    kind: KeyEventKind,
) -> Option<StepOutcome> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match key_code {
            KeyCode::Left => {
                game.move_left();
                None
            }
            KeyCode::Right => {
                game.move_right();
                None
            }
            KeyCode::Up => {
                game.rotate();
                None
            }
            KeyCode::Down => {
                if input.down_pressed {
                    input.last_update = Instant::now();
                    None
                } else {
                    input.press_down(game);
                    Some(game.soft_drop())
                }
            }
            KeyCode::Char(' ') => Some(game.hard_drop()),
            _ => None,
        },
        KeyEventKind::Release => {
            if key_code == KeyCode::Down {
                input.release_down(game);
            }
            None
        }
    }
}
