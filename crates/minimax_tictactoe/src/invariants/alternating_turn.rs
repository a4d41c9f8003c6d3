//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::GameSession;
use crate::types::Mark;

/// Invariant: marks alternate, starting with X.
///
/// While the game runs, the mark to move is the one after the last move.
/// Once the game is over the turn stays with whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some(first) = history.first() else {
            return *session.to_move() == Mark::X;
        };
        if first.mark != Mark::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let last = history[history.len() - 1].mark;
        let expected = if session.is_active() {
            last.opponent()
        } else {
            last
        };
        *session.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
