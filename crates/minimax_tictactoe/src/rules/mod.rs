//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Both the controller and the search use
//! them, so they carry no tracing.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_win, winner, winning_line};

use crate::types::{Board, GameStatus, Mark};

/// Status after `last_mover` has played.
///
/// Only the mover can have completed a line, so that mark is checked first,
/// then the board is checked for a draw.
pub fn evaluate_status(board: &Board, last_mover: Mark) -> GameStatus {
    if check_win(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// A terminal board has a completed line or no empty cells.
pub fn is_terminal(board: &Board) -> bool {
    winning_line(board).is_some() || is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_after_winning_move() {
        let board: Board = "XXXOO____".parse().unwrap();
        assert_eq!(evaluate_status(&board, Mark::X), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_status_of_full_board_without_line() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate_status(&board, Mark::X), GameStatus::Draw);
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_status_mid_game() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(evaluate_status(&board, Mark::O), GameStatus::InProgress);
        assert!(!is_terminal(&board));
    }
}
