//! Tic-tac-toe against a computer that never loses.
//!
//! The human plays X, the computer plays O and picks its moves with an
//! exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a [`Board`]
//! - **Evaluator**: [`best_move`], pure and side-effect free
//! - **Session**: [`GameSession`], one match as a plain value
//! - **Controller**: [`GameController`], turn sequencing with an injectable
//!   [`TurnScheduler`] for the computer's reply
//! - **View**: [`SessionView`], what a UI draws
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{GameController, InlineScheduler, Mark, Square};
//!
//! let mut controller = GameController::new(InlineScheduler);
//! controller.start("Ann");
//! assert_eq!(controller.view().status_message, "It's Ann's turn");
//!
//! controller.submit_move(4);
//! // The inline scheduler has already played the computer's reply.
//! assert_eq!(controller.session().board().get(0), Some(Square::Occupied(Mark::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod evaluator;
mod invariants;
mod position;
pub mod rules;
mod scheduler;
mod session;
mod types;
mod view;

pub use action::{Move, MoveRejected};
pub use controller::{DEFAULT_COMPUTER_DELAY, GameController};
pub use evaluator::{
    DRAW_SCORE, O_WIN_SCORE, ScoredMove, SearchStats, X_WIN_SCORE, best_move,
    best_move_with_stats, minimax_score, terminal_score,
};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants,
};
pub use position::Position;
pub use rules::{check_win, evaluate_status, is_draw, is_terminal, winning_line};
pub use scheduler::{ComputerTurn, Dispatch, InlineScheduler, QueuedScheduler, TurnScheduler};
pub use session::{COMPUTER_MARK, DEFAULT_PLAYER_NAME, GameSession, HUMAN_MARK, SessionState};
pub use types::{Board, BoardParseError, GameStatus, Mark, Square};
pub use view::{CellView, COMPUTER_LABEL, DRAW_MESSAGE, SessionView, WAITING_MESSAGE, turn_message};
