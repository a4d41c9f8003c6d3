//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};

/// The 8 index triples that win when held by a single mark.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `mark` holds all three cells of any winning line.
///
/// Empty cells never satisfy a line.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(target)))
}

/// Returns the first satisfied winning line, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the mark holding a winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).and_then(Square::mark))
}
