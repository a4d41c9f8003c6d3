//! Game session: the state one human-vs-computer match lives in.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{Move, MoveRejected};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules::evaluate_status;
use crate::types::{Board, GameStatus, Mark};

/// Name shown for the human when none was entered.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// The mark the human plays.
pub const HUMAN_MARK: Mark = Mark::X;

/// The mark the computer plays.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Created but never started.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a line.
    Draw,
}

impl SessionState {
    /// True while moves are accepted.
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::InProgress)
    }
}

impl From<GameStatus> for SessionState {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => SessionState::InProgress,
            GameStatus::Won(mark) => SessionState::Won(mark),
            GameStatus::Draw => SessionState::Draw,
        }
    }
}

/// A single match between the human (X) and the computer (O).
///
/// Owned by a [`GameController`](crate::GameController). Every transition
/// either applies completely or returns a [`MoveRejected`] and leaves the
/// session as it was.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// Current board.
    board: Board,
    /// Mark expected to move next.
    to_move: Mark,
    /// Lifecycle state, cached after every move.
    state: SessionState,
    /// Display name of the human player.
    player_name: String,
    /// Accepted moves in play order.
    history: Vec<Move>,
    /// Bumped on every start and restart.
    generation: u64,
}

impl GameSession {
    /// Creates a session that has not been started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: HUMAN_MARK,
            state: SessionState::NotStarted,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            history: Vec::new(),
            generation: 0,
        }
    }

    /// Starts a fresh game for `name`.
    ///
    /// A blank name falls back to [`DEFAULT_PLAYER_NAME`].
    #[instrument(skip(self), fields(generation = self.generation + 1))]
    pub fn start(&mut self, name: &str) {
        self.player_name = if name.trim().is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        self.reset();
        info!(player_name = %self.player_name, "Game started");
    }

    /// Starts a fresh game keeping the recorded name.
    #[instrument(skip(self), fields(generation = self.generation + 1))]
    pub fn restart(&mut self) {
        self.reset();
        info!(player_name = %self.player_name, "Game restarted");
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = HUMAN_MARK;
        self.state = SessionState::InProgress;
        self.history.clear();
        self.generation += 1;
    }

    /// Places the human's mark at `index`.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn submit_move(&mut self, index: usize) -> Result<SessionState, MoveRejected> {
        self.play(index, HUMAN_MARK)
    }

    /// Places the computer's mark at `index`.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_computer_move(&mut self, index: usize) -> Result<SessionState, MoveRejected> {
        self.play(index, COMPUTER_MARK)
    }

    fn play(&mut self, index: usize, mark: Mark) -> Result<SessionState, MoveRejected> {
        if !self.state.is_active() {
            return Err(MoveRejected::GameNotActive);
        }
        if self.to_move != mark {
            return Err(MoveRejected::NotYourTurn(mark));
        }
        let position = Position::from_index(index).ok_or(MoveRejected::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveRejected::Occupied(position));
        }

        self.board.place(index, mark);
        self.history.push(Move::new(mark, position));
        self.state = evaluate_status(&self.board, mark).into();
        if self.state.is_active() {
            self.to_move = mark.opponent();
        }

        debug!(%mark, %position, state = ?self.state, "Move applied");
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated: {:?}",
            SessionInvariants::check_all(self)
        );
        Ok(self.state)
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Number of moves played this game.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Board status, `None` before the first start.
    pub fn status(&self) -> Option<GameStatus> {
        match self.state {
            SessionState::NotStarted => None,
            SessionState::InProgress => Some(GameStatus::InProgress),
            SessionState::Won(mark) => Some(GameStatus::Won(mark)),
            SessionState::Draw => Some(GameStatus::Draw),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameSession {
        let mut session = GameSession::new();
        session.start("Ann");
        session
    }

    #[test]
    fn test_new_session_rejects_moves() {
        let mut session = GameSession::new();
        assert_eq!(*session.state(), SessionState::NotStarted);
        assert_eq!(session.submit_move(0), Err(MoveRejected::GameNotActive));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_start_records_name_and_generation() {
        let session = started();
        assert_eq!(session.player_name(), "Ann");
        assert_eq!(*session.generation(), 1);
        assert_eq!(*session.to_move(), Mark::X);
        assert!(session.is_active());
    }

    #[test]
    fn test_name_kept_as_entered() {
        let mut session = GameSession::new();
        session.start(" Ann ");
        assert_eq!(session.player_name(), " Ann ");
    }

    #[test]
    fn test_restart_before_start_begins_default_game() {
        let mut session = GameSession::new();
        session.restart();
        assert!(session.is_active());
        assert_eq!(session.player_name(), DEFAULT_PLAYER_NAME);
        assert_eq!(*session.generation(), 1);
        assert_eq!(*session.to_move(), Mark::X);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut session = GameSession::new();
        session.start("   ");
        assert_eq!(session.player_name(), DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = started();
        assert_eq!(session.submit_move(4), Ok(SessionState::InProgress));
        assert_eq!(*session.to_move(), Mark::O);
        assert_eq!(session.submit_move(0), Err(MoveRejected::NotYourTurn(Mark::X)));
        assert_eq!(session.apply_computer_move(0), Ok(SessionState::InProgress));
        assert_eq!(*session.to_move(), Mark::X);
        assert_eq!(session.ply(), 2);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut session = started();
        session.submit_move(4).unwrap();
        session.apply_computer_move(0).unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_move(4),
            Err(MoveRejected::Occupied(Position::Center))
        );
        assert_eq!(session.submit_move(9), Err(MoveRejected::OutOfRange(9)));
        assert_eq!(
            session.apply_computer_move(1),
            Err(MoveRejected::NotYourTurn(Mark::O))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_freezes_session() {
        let mut session = started();
        for (x, o) in [(0, 3), (1, 4)] {
            session.submit_move(x).unwrap();
            session.apply_computer_move(o).unwrap();
        }
        assert_eq!(session.submit_move(2), Ok(SessionState::Won(Mark::X)));
        // Turn owner stays with the winner.
        assert_eq!(*session.to_move(), Mark::X);
        assert_eq!(session.status(), Some(GameStatus::Won(Mark::X)));
        assert_eq!(session.submit_move(5), Err(MoveRejected::GameNotActive));
    }

    #[test]
    fn test_restart_keeps_name_and_clears_board() {
        let mut session = started();
        session.submit_move(4).unwrap();
        session.restart();
        assert_eq!(session.player_name(), "Ann");
        assert_eq!(*session.generation(), 2);
        assert!(session.history().is_empty());
        assert_eq!(session.board().empty_cells().count(), 9);
        assert_eq!(*session.to_move(), Mark::X);
    }
}
