//! Keyboard handling: cursor movement and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use minimax_tictactoe::Position;

/// What a key press asks the game screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Move the cursor to a new position.
    Cursor(Position),
    /// Place X at a position.
    Place(Position),
    /// Restart with the same name.
    Restart,
    /// Go back to the name prompt.
    NewPlayer,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key on the game screen to an action.
pub fn game_key(cursor: Position, key: KeyEvent) -> GameKey {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameKey::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => GameKey::Quit,
        KeyCode::Char('r') => GameKey::Restart,
        KeyCode::Char('n') => GameKey::NewPlayer,
        KeyCode::Enter | KeyCode::Char(' ') => GameKey::Place(cursor),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d @ 1..=9) => Position::from_index(d as usize - 1)
                .map(GameKey::Place)
                .unwrap_or(GameKey::Ignore),
            _ => GameKey::Ignore,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            GameKey::Cursor(move_cursor(cursor, key.code))
        }
        _ => GameKey::Ignore,
    }
}

/// Moves cursor based on arrow keys; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
