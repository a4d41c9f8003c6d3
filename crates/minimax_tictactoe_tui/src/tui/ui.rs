//! Stateless UI rendering for the game.

use minimax_tictactoe::{CellView, Mark, Position, SessionView, TurnScheduler};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};

const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Renders the current screen.
pub fn draw<S: TurnScheduler>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board or prompt
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Minimax Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::NameEntry { input } => {
            draw_name_prompt(frame, chunks[1], input);
            draw_status(frame, chunks[2], "Enter your name to start");
            draw_help(frame, chunks[3], "Enter: start  Esc: quit");
        }
        Screen::Playing => {
            let view = app.view();
            draw_board(frame, chunks[1], &view, app.cursor(), app.frame());
            draw_status(frame, chunks[2], &view.status_message);
            draw_help(
                frame,
                chunks[3],
                "Arrows/1-9: move  Enter: place  r: restart  n: new player  q: quit",
            );
        }
    }
}

fn draw_name_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let prompt_area = center_rect(area, 40, 3);
    let prompt = Paragraph::new(format!("{}_", input))
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Your name").borders(Borders::ALL));
    frame.render_widget(prompt, prompt_area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_help(frame: &mut Frame, area: Rect, help: &str) {
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, tick: u64) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, tick, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &SessionView,
    cursor: Position,
    tick: u64,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        let index = row * 3 + col;
        let on_line = view
            .winning_line
            .is_some_and(|line| line.contains(&index));
        draw_cell(
            frame,
            cols[col * 2],
            view.cells[index],
            cursor.to_index() == index,
            on_line,
            tick,
        );
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: CellView,
    at_cursor: bool,
    on_line: bool,
    tick: u64,
) {
    let (symbol, base_style) = match cell.mark {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = if cell.highlight {
        base_style.fg(rainbow(tick, on_line))
    } else {
        base_style
    };
    if on_line {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if at_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Cycling colour for a won board. Cells on the line run a step ahead.
fn rainbow(tick: u64, on_line: bool) -> Color {
    let step = (tick / 4) as usize + usize::from(on_line);
    RAINBOW[step % RAINBOW.len()]
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
