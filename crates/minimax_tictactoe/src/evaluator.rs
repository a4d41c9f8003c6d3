//! Exhaustive minimax move selection.
//!
//! O maximizes and X minimizes. Scores are absolute outcomes: an X line is
//! [`X_WIN_SCORE`], an O line is [`O_WIN_SCORE`], a full board without a
//! line is [`DRAW_SCORE`]. Depth is ignored, so a quick win and a slow win
//! score the same.
//!
//! Every recursive call works on its own copy of the board. Ties go to the
//! first move reaching the best score in ascending index order.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::{check_win, is_terminal};
use crate::types::{Board, Mark};

/// Score of a board on which X holds a line.
pub const X_WIN_SCORE: i32 = -10;
/// Score of a board on which O holds a line.
pub const O_WIN_SCORE: i32 = 10;
/// Score of a full board without a line.
pub const DRAW_SCORE: i32 = 0;

/// A chosen move and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Board index (0-8) of the move.
    pub index: usize,
    /// Minimax score of the position after the move.
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root's children and all terminals.
    pub nodes: u64,
}

/// Picks the minimax-optimal move for `mark`.
///
/// # Panics
///
/// Panics if `board` is terminal (a completed line or no empty cell). The
/// controller never asks for a move on such a board.
pub fn best_move(board: &Board, mark: Mark) -> ScoredMove {
    best_move_with_stats(board, mark).0
}

/// [`best_move`] plus the number of nodes the search visited.
///
/// # Panics
///
/// Panics if `board` is terminal.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_move_with_stats(board: &Board, mark: Mark) -> (ScoredMove, SearchStats) {
    assert!(
        !is_terminal(board),
        "best_move called on terminal board {}",
        board.to_compact()
    );

    let mut stats = SearchStats::default();
    let mut best: Option<ScoredMove> = None;

    for index in board.empty_cells() {
        let child = board.with_mark(index, mark);
        let score = search(&child, mark.opponent(), &mut stats);
        if best.is_none_or(|b| improves(mark, score, b.score)) {
            best = Some(ScoredMove { index, score });
        }
    }

    // A non-terminal board always has an empty cell.
    let best = best.unwrap_or_else(|| unreachable!("non-terminal board without empty cells"));
    debug!(
        index = best.index,
        score = best.score,
        nodes = stats.nodes,
        "Search complete"
    );
    (best, stats)
}

/// Minimax value of `board` with `to_move` about to play.
///
/// Defined on every board, terminal or not.
pub fn minimax_score(board: &Board, to_move: Mark) -> i32 {
    search(board, to_move, &mut SearchStats::default())
}

fn search(board: &Board, to_move: Mark, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best: Option<i32> = None;
    for index in board.empty_cells() {
        let child = board.with_mark(index, to_move);
        let score = search(&child, to_move.opponent(), stats);
        if best.is_none_or(|b| improves(to_move, score, b)) {
            best = Some(score);
        }
    }

    best.unwrap_or(DRAW_SCORE)
}

/// Score of a finished board, `None` while play can continue.
pub fn terminal_score(board: &Board) -> Option<i32> {
    if check_win(board, Mark::X) {
        Some(X_WIN_SCORE)
    } else if check_win(board, Mark::O) {
        Some(O_WIN_SCORE)
    } else if board.empty_cells().next().is_none() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Strict comparison keeps the earliest move on ties.
fn improves(mover: Mark, candidate: i32, current: i32) -> bool {
    match mover {
        Mark::O => candidate > current,
        Mark::X => candidate < current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(&board("XXXOO____")), Some(X_WIN_SCORE));
        assert_eq!(terminal_score(&board("OOOXX_X__")), Some(O_WIN_SCORE));
        assert_eq!(terminal_score(&board("XOXXOOOXX")), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&Board::new()), None);
    }

    #[test]
    fn test_minimax_score_on_terminal_board() {
        assert_eq!(minimax_score(&board("XXXOO____"), Mark::O), X_WIN_SCORE);
    }

    #[test]
    fn test_takes_first_winning_index_on_tie() {
        // O can win at 5 but 2 also forces a win and comes first.
        let chosen = best_move(&board("XX_OO____"), Mark::O);
        assert_eq!(chosen, ScoredMove { index: 2, score: O_WIN_SCORE });
    }

    #[test]
    fn test_blocks_diagonal_threat() {
        // X threatens 2-4-6.
        let chosen = best_move(&board("O___X_X__"), Mark::O);
        assert_eq!(chosen, ScoredMove { index: 2, score: DRAW_SCORE });
    }

    #[test]
    fn test_blocks_top_row_threat() {
        let chosen = best_move(&board("X_X_O____"), Mark::O);
        assert_eq!(chosen, ScoredMove { index: 1, score: DRAW_SCORE });
    }

    #[test]
    fn test_lost_position_still_returns_first_empty_cell() {
        // X has a double threat; every reply loses.
        let chosen = best_move(&board("XX_O_____"), Mark::O);
        assert_eq!(chosen, ScoredMove { index: 2, score: X_WIN_SCORE });
    }

    #[test]
    fn test_x_minimizes() {
        // X completes the top row at 2.
        let chosen = best_move(&board("XX_OO____"), Mark::X);
        assert_eq!(chosen, ScoredMove { index: 2, score: X_WIN_SCORE });
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let before = board("X___O____");
        let copy = before;
        let _ = best_move(&before, Mark::X);
        assert_eq!(before, copy);
    }

    #[test]
    fn test_empty_board_node_count() {
        let (chosen, stats) = best_move_with_stats(&Board::new(), Mark::X);
        assert_eq!(chosen, ScoredMove { index: 0, score: DRAW_SCORE });
        // Full game tree below the root.
        assert_eq!(stats.nodes, 549_945);
    }

    #[test]
    #[should_panic(expected = "terminal board")]
    fn test_panics_on_won_board() {
        best_move(&board("XXXOO____"), Mark::O);
    }

    #[test]
    #[should_panic(expected = "terminal board")]
    fn test_panics_on_full_board() {
        best_move(&board("XOXXOOOXX"), Mark::O);
    }
}
