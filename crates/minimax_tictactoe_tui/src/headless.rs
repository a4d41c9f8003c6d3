//! Non-interactive commands: solve a position, or watch minimax play itself.

use anyhow::{Context, Result, bail};
use minimax_tictactoe::{
    Board, GameController, InlineScheduler, Mark, Move, ScoredMove, SearchStats, SessionState,
    best_move, best_move_with_stats, is_terminal,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Result of `solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Board in compact form.
    pub board: String,
    /// Mark the move was chosen for.
    pub mark: Mark,
    /// Chosen move and its score.
    pub best: ScoredMove,
    /// Search counters.
    pub stats: SearchStats,
}

/// Result of `selfplay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// Moves in play order.
    pub moves: Vec<Move>,
    /// Final board in compact form.
    pub board: String,
    /// How the game ended.
    pub outcome: SessionState,
}

/// Finds the minimax move on `board` for `mark`, or for the side to move.
#[instrument]
pub fn solve_report(board: &str, mark: Option<Mark>) -> Result<SolveReport> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    if is_terminal(&parsed) {
        bail!("Board {} is already finished", parsed.to_compact());
    }

    let mark = mark.unwrap_or_else(|| parsed.mark_to_move());
    let (best, stats) = best_move_with_stats(&parsed, mark);
    info!(index = best.index, score = best.score, nodes = stats.nodes, "Solved");

    Ok(SolveReport {
        board: parsed.to_compact(),
        mark,
        best,
        stats,
    })
}

/// Plays minimax X against the controller's minimax O until the game ends.
#[instrument]
pub fn selfplay_report() -> SelfPlayReport {
    let mut controller = GameController::new(InlineScheduler);
    controller.start("Minimax");

    while controller.session().is_active() {
        let chosen = best_move(controller.session().board(), Mark::X);
        controller.submit_move(chosen.index);
    }

    let session = controller.session();
    info!(outcome = ?session.state(), moves = session.history().len(), "Self-play finished");
    SelfPlayReport {
        moves: session.history().clone(),
        board: session.board().to_compact(),
        outcome: *session.state(),
    }
}

/// Prints a solve report as text or JSON.
pub fn print_solve(report: &SolveReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let board: Board = report.board.parse()?;
    println!("{}\n", board.display());
    println!("{}", solve_summary(report));
    Ok(())
}

/// One-line text form of a solve report. Squares use the keypad numbers
/// shown on the board; the JSON index is 0-based.
fn solve_summary(report: &SolveReport) -> String {
    format!(
        "{} plays square {} (index {}, score {}, {} nodes searched)",
        report.mark,
        report.best.index + 1,
        report.best.index,
        report.best.score,
        report.stats.nodes
    )
}

/// Prints a self-play report as text or JSON.
pub fn print_selfplay(report: &SelfPlayReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for (turn, mv) in report.moves.iter().enumerate() {
        println!("{:>2}. {}", turn + 1, mv);
    }
    let board: Board = report.board.parse()?;
    println!("\n{}\n", board.display());
    match report.outcome {
        SessionState::Won(mark) => println!("Player {} has won!", mark),
        SessionState::Draw => println!("Game ended in a draw!"),
        other => println!("Stopped early: {:?}", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_takes_the_win() {
        let report = solve_report("XX_OO____", Some(Mark::O)).unwrap();
        assert_eq!(report.best, ScoredMove { index: 2, score: 10 });
    }

    #[test]
    fn test_summary_names_square_and_index() {
        let report = solve_report("XX_OO____", Some(Mark::O)).unwrap();
        let summary = solve_summary(&report);
        assert!(summary.starts_with("O plays square 3 (index 2, score 10,"));
    }

    #[test]
    fn test_solve_defaults_to_side_to_move() {
        // Equal counts, so X is to move and completes the top row.
        let report = solve_report("X_X_O_O__", None).unwrap();
        assert_eq!(report.mark, Mark::X);
        assert_eq!(report.best.index, 1);
    }

    #[test]
    fn test_solve_rejects_bad_boards() {
        assert!(solve_report("XXX", None).is_err());
        assert!(solve_report("XXXOO____", None).is_err());
        assert!(solve_report("XZ_______", None).is_err());
    }

    #[test]
    fn test_selfplay_is_a_draw() {
        let report = selfplay_report();
        assert_eq!(report.outcome, SessionState::Draw);
        assert_eq!(report.moves.len(), 9);
        let indices: Vec<usize> = report.moves.iter().map(|m| m.position.to_index()).collect();
        assert_eq!(indices, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
    }

    #[test]
    fn test_reports_serialize() {
        let json = serde_json::to_value(solve_report("____X____", Some(Mark::O)).unwrap()).unwrap();
        assert_eq!(json["best"]["index"], 0);
        assert_eq!(json["best"]["score"], 0);
        assert_eq!(json["mark"], "O");
    }
}
