use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use blockfall::constants::{COLS, ROWS};
use blockfall::game::{Cell, Game, PieceSource};

/// Display color for a board color id. Id 0 is the background.
fn cell_color(cell: Cell) -> Color {
    match cell {
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Blue,
        4 => Color::Yellow,
        5 => Color::Magenta,
        6 => Color::Cyan,
        7 => Color::LightRed,
        _ => Color::Black,
    }
}

pub fn ui<S: PieceSource>(f: &mut Frame, game: &Game<S>, show_game_over: bool) {
    let size = f.size();

    let board_height = ROWS as u16 + 2;
    let board_width = COLS as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(15),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    render_board(f, game, board_area);
    render_info(f, game, horizontal_chunks[2]);

    if show_game_over {
        render_game_over(f, board_area);
    }
}

fn render_board<S: PieceSource>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let mut grid = game.board_snapshot();

    let piece = game.active_piece();
    for (x, y) in piece.get_blocks() {
        if x >= 0 && x < COLS as i32 && y >= 0 && y < ROWS as i32 {
            grid[y as usize][x as usize] = piece.color;
        }
    }

    let board_lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&cell| {
                        if cell == 0 {
                            Span::raw("  ")
                        } else {
                            Span::styled("██", Style::default().fg(cell_color(cell)))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info<S: PieceSource>(f: &mut Frame, game: &Game<S>, area: Rect) {
    let info_text = vec![
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.lines_cleared().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("←→ move")]),
        Line::from(vec![Span::raw("↑ rotate")]),
        Line::from(vec![Span::raw("↓ drop")]),
        Line::from(vec![Span::raw("SPC hard")]),
        Line::from(vec![Span::raw("R reset")]),
        Line::from(vec![Span::raw("Q quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 20, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Game Over!", Style::default().fg(Color::Red))]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
