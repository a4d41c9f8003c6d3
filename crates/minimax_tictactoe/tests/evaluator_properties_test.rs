//! Properties of the minimax evaluator over the whole game tree.

use std::collections::HashSet;

use minimax_tictactoe::{
    Board, DRAW_SCORE, GameStatus, Mark, O_WIN_SCORE, Square, best_move, check_win,
    evaluate_status, is_terminal, minimax_score,
};

/// Every board reachable from the empty board by legal alternating play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        let mark = board.mark_to_move();
        for index in board.empty_cells().collect::<Vec<_>>() {
            stack.push(board.with_mark(index, mark));
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_best_move_is_always_an_empty_cell() {
    for board in reachable_boards() {
        if is_terminal(&board) {
            continue;
        }
        let mark = board.mark_to_move();
        let chosen = best_move(&board, mark);
        assert_eq!(
            board.get(chosen.index),
            Some(Square::Empty),
            "best_move picked occupied cell on {}",
            board.to_compact()
        );
        assert_eq!(chosen.score, minimax_score(&board, mark));
    }
}

/// Plays every possible X line against the minimax O and returns the
/// statuses of all finished games.
fn outcomes_against_every_x(board: Board, out: &mut Vec<GameStatus>) {
    for x in board.empty_cells().collect::<Vec<_>>() {
        let after_x = board.with_mark(x, Mark::X);
        let status = evaluate_status(&after_x, Mark::X);
        if status.is_over() {
            out.push(status);
            continue;
        }
        let reply = best_move(&after_x, Mark::O);
        let after_o = after_x.with_mark(reply.index, Mark::O);
        let status = evaluate_status(&after_o, Mark::O);
        if status.is_over() {
            out.push(status);
        } else {
            outcomes_against_every_x(after_o, out);
        }
    }
}

#[test]
fn test_computer_never_loses() {
    let mut outcomes = Vec::new();
    outcomes_against_every_x(Board::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(
        !outcomes.contains(&GameStatus::Won(Mark::X)),
        "X found a winning line against minimax"
    );
    // Weak X play gets punished somewhere in the tree.
    assert!(outcomes.contains(&GameStatus::Won(Mark::O)));
    assert!(outcomes.contains(&GameStatus::Draw));
}

#[test]
fn test_perfect_play_draws() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    let mut played = Vec::new();
    let status = loop {
        let chosen = best_move(&board, mark);
        board = board.with_mark(chosen.index, mark);
        played.push(chosen.index);
        let status = evaluate_status(&board, mark);
        if status.is_over() {
            break status;
        }
        mark = mark.opponent();
    };

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(played, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
}

#[test]
fn test_check_win_examples() {
    let board: Board = "XXXOO____".parse().unwrap();
    assert!(check_win(&board, Mark::X));
    assert!(!check_win(&board, Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(!check_win(&board, Mark::X));
    assert!(!check_win(&board, Mark::O));
    assert_eq!(evaluate_status(&board, Mark::X), GameStatus::Draw);
}

#[test]
fn test_threat_on_top_row_is_answered() {
    let board: Board = "XX_OO____".parse().unwrap();
    let chosen = best_move(&board, Mark::O);
    assert_eq!(chosen.index, 2);
    assert_eq!(chosen.score, O_WIN_SCORE);
}

#[test]
fn test_center_opening_answered_in_corner() {
    let board: Board = "____X____".parse().unwrap();
    let chosen = best_move(&board, Mark::O);
    assert_eq!(chosen.index, 0);
    assert_eq!(chosen.score, DRAW_SCORE);
}
