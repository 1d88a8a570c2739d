use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

mod input;
mod ui;

use blockfall::constants::{FAST_DROP_MS, GAME_OVER_NOTICE_MS, NORMAL_DROP_MS};
use blockfall::{Game, GameConfig, StepOutcome};
use input::handler::{handle_input, InputState};
use ui::renderer::ui;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Args {
    /// Milliseconds between drop steps.
    #[arg(long, default_value_t = NORMAL_DROP_MS, value_name = "MS")]
    drop_ms: u64,

    /// Milliseconds between drop steps while the down key is held.
    #[arg(long, default_value_t = FAST_DROP_MS, value_name = "MS")]
    fast_drop_ms: u64,

    /// Seed for a reproducible piece sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig::from_millis(args.drop_ms, args.fast_drop_ms, args.seed)
        .context("invalid game configuration")?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key release events let the down key hold fast drop precisely
    let keyboard_enhancement_active = matches!(
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        ),
        Ok(())
    );

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, keyboard_enhancement_active);

    // Cleanup
    if keyboard_enhancement_active {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
    keyboard_enhancement_active: bool,
) -> Result<()> {
    let mut game = Game::new(config);
    let mut input = InputState::new(keyboard_enhancement_active);
    let mut game_over_at: Option<Instant> = None;
    let mut last_tick = Instant::now();

    loop {
        let show_game_over = game_over_at
            .map_or(false, |t| t.elapsed() < Duration::from_millis(GAME_OVER_NOTICE_MS));
        terminal.draw(|f| ui(f, &game, show_game_over))?;

        let mut outcome = None;
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            game.reset();
                            input = InputState::new(keyboard_enhancement_active);
                            game_over_at = None;
                        }
                    }
                    _ => {
                        outcome = handle_input(&mut game, &mut input, code, kind);
                    }
                }
            }
        }

        input.check_timeouts(&mut game);

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;
        let step = game.tick(elapsed);

        if outcome == Some(StepOutcome::GameOver) || step == Some(StepOutcome::GameOver) {
            game_over_at = Some(Instant::now());
        }
    }

    Ok(())
}
