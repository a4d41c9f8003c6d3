//! Moves and the reasons a move can be turned down.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Mark;

/// A mark placed at a position.
///
/// Accepted moves are recorded in the session history in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a submitted move was not applied.
///
/// Every rejection leaves the session untouched. The controller logs these
/// and otherwise ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// No game is running (not started yet, or already won or drawn).
    #[display("No game is in progress")]
    GameNotActive,

    /// The index is outside 0-8.
    #[display("Position {} is off the board", _0)]
    OutOfRange(usize),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// It is the other mark's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveRejected {}
