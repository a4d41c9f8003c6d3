//! Game controller: sequences human and computer turns over a session.

use std::time::Duration;

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::evaluator::best_move_with_stats;
use crate::scheduler::{ComputerTurn, Dispatch, TurnScheduler};
use crate::session::{COMPUTER_MARK, GameSession, SessionState};
use crate::view::SessionView;

/// Default pause before the computer replies. Cosmetic only.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(2);

/// Drives one [`GameSession`] against the minimax computer.
///
/// Human events come in through [`start`](Self::start),
/// [`restart`](Self::restart) and [`submit_move`](Self::submit_move).
/// The computer's reply goes through the injected [`TurnScheduler`], and
/// arrives back at [`computer_move`](Self::computer_move) when the
/// scheduler defers it.
#[derive(Debug, Getters)]
pub struct GameController<S> {
    session: GameSession,
    scheduler: S,
    computer_delay: Duration,
}

impl<S: TurnScheduler> GameController<S> {
    /// Creates a controller with a session that has not started.
    pub fn new(scheduler: S) -> Self {
        Self::with_delay(scheduler, DEFAULT_COMPUTER_DELAY)
    }

    /// Creates a controller with a custom computer delay.
    #[instrument(skip(scheduler))]
    pub fn with_delay(scheduler: S, computer_delay: Duration) -> Self {
        info!("Creating game controller");
        Self {
            session: GameSession::new(),
            scheduler,
            computer_delay,
        }
    }

    /// Mutable access to the scheduler, e.g. to drain queued tickets.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Starts a new game for `name` (blank falls back to the default name).
    #[instrument(skip(self))]
    pub fn start(&mut self, name: &str) {
        self.session.start(name);
    }

    /// Starts a new game keeping the current name.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Handles the human choosing cell `index`.
    ///
    /// Returns `true` if the move was applied. Invalid moves (out of range,
    /// occupied, wrong turn, no active game) change nothing and return
    /// `false`.
    #[instrument(skip(self), fields(generation = *self.session.generation()))]
    pub fn submit_move(&mut self, index: usize) -> bool {
        match self.session.submit_move(index) {
            Ok(SessionState::InProgress) => {
                self.hand_turn_to_computer();
                true
            }
            Ok(state) => {
                info!(?state, "Game over");
                true
            }
            Err(reason) => {
                debug!(%reason, "Ignoring move");
                false
            }
        }
    }

    fn hand_turn_to_computer(&mut self) {
        let ticket = ComputerTurn {
            generation: *self.session.generation(),
            ply: self.session.ply(),
        };
        match self.scheduler.schedule(ticket, self.computer_delay) {
            Dispatch::Inline => {
                self.computer_move(ticket);
            }
            Dispatch::Deferred => debug!(?ticket, "Computer turn deferred"),
        }
    }

    /// Plays the computer's reply for `ticket`.
    ///
    /// Returns `true` if a move was made. Tickets from an earlier game or an
    /// earlier ply, or arriving when it is not O's turn, are ignored.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self, ticket: ComputerTurn) -> bool {
        if ticket.generation != *self.session.generation() || ticket.ply != self.session.ply() {
            warn!(
                current_generation = *self.session.generation(),
                current_ply = self.session.ply(),
                "Ignoring stale computer turn"
            );
            return false;
        }
        if !self.session.is_active() || *self.session.to_move() != COMPUTER_MARK {
            debug!(state = ?self.session.state(), "Not the computer's turn");
            return false;
        }

        let (chosen, stats) = best_move_with_stats(self.session.board(), COMPUTER_MARK);
        debug!(
            index = chosen.index,
            score = chosen.score,
            nodes = stats.nodes,
            "Computer chose move"
        );

        match self.session.apply_computer_move(chosen.index) {
            Ok(SessionState::InProgress) => true,
            Ok(state) => {
                info!(?state, "Game over");
                true
            }
            Err(reason) => {
                // The search only returns empty cells of a live board.
                warn!(%reason, "Computer move rejected");
                false
            }
        }
    }

    /// Render snapshot of the current session.
    pub fn view(&self) -> SessionView {
        SessionView::of(&self.session)
    }
}
