//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Mark, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board on which neither mark holds a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Mark::X) && !check_win(board, Mark::O)
}
