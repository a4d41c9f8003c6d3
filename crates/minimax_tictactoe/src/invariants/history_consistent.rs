//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::GameSession;
use crate::types::Board;

/// Invariant: replaying the move history onto an empty board yields the
/// current board, and no square was played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for m in session.history() {
            let index = m.position.to_index();
            if !replayed.is_empty(index) {
                return false;
            }
            replayed = replayed.with_mark(index, m.mark);
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board matches replayed move history"
    }
}
