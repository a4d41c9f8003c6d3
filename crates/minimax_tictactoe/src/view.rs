//! What a UI renders after each transition.

use serde::Serialize;
use tracing::instrument;

use crate::rules::winning_line;
use crate::session::{GameSession, SessionState};
use crate::types::{Board, Mark};

/// Fixed label for the computer in turn prompts.
pub const COMPUTER_LABEL: &str = "Computer";

/// Status line before any game has started.
pub const WAITING_MESSAGE: &str = "Waiting for game to start...";

/// Status line for a drawn game.
pub const DRAW_MESSAGE: &str = "Game ended in a draw!";

/// One cell as the UI should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellView {
    /// Mark to draw, `None` for an empty cell.
    pub mark: Option<Mark>,
    /// Set on every cell once the game is won.
    pub highlight: bool,
}

/// Snapshot of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Turn prompt, win announcement or draw announcement.
    pub status_message: String,
    /// Cells in index order.
    pub cells: [CellView; 9],
    /// The completed line, when the game was won.
    pub winning_line: Option<[usize; 3]>,
}

impl SessionView {
    /// Builds the view of `session`.
    #[instrument(skip(session), fields(state = ?session.state()))]
    pub fn of(session: &GameSession) -> Self {
        let won = matches!(session.state(), SessionState::Won(_));
        Self {
            status_message: status_message(session),
            cells: cells(session.board(), won),
            winning_line: if won {
                winning_line(session.board())
            } else {
                None
            },
        }
    }
}

fn cells(board: &Board, highlight: bool) -> [CellView; 9] {
    let mut cells = [CellView::default(); 9];
    for (cell, square) in cells.iter_mut().zip(board.squares()) {
        *cell = CellView {
            mark: square.mark(),
            highlight,
        };
    }
    cells
}

/// Status line for the session's current state.
pub fn status_message(session: &GameSession) -> String {
    match session.state() {
        SessionState::NotStarted => WAITING_MESSAGE.to_string(),
        SessionState::InProgress => turn_message(session.player_name(), *session.to_move()),
        SessionState::Won(mark) => format!("Player {} has won!", mark),
        SessionState::Draw => DRAW_MESSAGE.to_string(),
    }
}

/// Prompt naming whoever is to move.
pub fn turn_message(player_name: &str, to_move: Mark) -> String {
    let name = match to_move {
        Mark::X => player_name,
        Mark::O => COMPUTER_LABEL,
    };
    format!("It's {}'s turn", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_before_start() {
        let view = SessionView::of(&GameSession::new());
        assert_eq!(view.status_message, WAITING_MESSAGE);
        assert!(view.cells.iter().all(|c| c.mark.is_none() && !c.highlight));
    }

    #[test]
    fn test_turn_prompts() {
        assert_eq!(turn_message("Ann", Mark::X), "It's Ann's turn");
        assert_eq!(turn_message("Ann", Mark::O), "It's Computer's turn");
    }

    #[test]
    fn test_win_highlights_every_cell() {
        let mut session = GameSession::new();
        session.start("Ann");
        for (x, o) in [(0, 3), (1, 4)] {
            session.submit_move(x).unwrap();
            session.apply_computer_move(o).unwrap();
        }
        session.submit_move(2).unwrap();

        let view = SessionView::of(&session);
        assert_eq!(view.status_message, "Player X has won!");
        assert!(view.cells.iter().all(|c| c.highlight));
        assert_eq!(view.cells[0].mark, Some(Mark::X));
        assert_eq!(view.cells[3].mark, Some(Mark::O));
        assert_eq!(view.cells[8].mark, None);
        assert_eq!(view.winning_line, Some([0, 1, 2]));
    }

    #[test]
    fn test_draw_has_no_highlight() {
        let mut session = GameSession::new();
        session.start("Ann");
        // X O X / X O O / O X X
        for (x, o) in [(0, 1), (2, 4), (3, 5), (7, 6)] {
            session.submit_move(x).unwrap();
            session.apply_computer_move(o).unwrap();
        }
        session.submit_move(8).unwrap();

        let view = SessionView::of(&session);
        assert_eq!(view.status_message, DRAW_MESSAGE);
        assert!(view.cells.iter().all(|c| !c.highlight));
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn test_view_serializes() {
        let mut session = GameSession::new();
        session.start("Ann");
        let json = serde_json::to_value(SessionView::of(&session)).unwrap();
        assert_eq!(json["status_message"], "It's Ann's turn");
        assert_eq!(json["cells"].as_array().map(Vec::len), Some(9));
    }
}
