//! Turn scheduling: when the computer's reply runs.
//!
//! After the human's move hands the turn to O, the controller asks its
//! [`TurnScheduler`] how to dispatch the reply. A UI host defers it so the
//! human's mark renders first; tests and headless runs take it inline.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Identifies one scheduled computer reply.
///
/// A ticket is only honoured while the session is still in the game
/// (`generation`) and at the move count (`ply`) it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputerTurn {
    /// Session generation the ticket belongs to.
    pub generation: u64,
    /// Number of moves on the board when the ticket was issued.
    pub ply: usize,
}

/// How a scheduled computer reply is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Run the reply before returning to the caller.
    Inline,
    /// The host calls [`GameController::computer_move`](crate::GameController::computer_move)
    /// with the ticket later.
    Deferred,
}

/// Decides when the computer's reply runs.
pub trait TurnScheduler {
    /// Arranges for `ticket` to be played after roughly `delay`.
    fn schedule(&mut self, ticket: ComputerTurn, delay: Duration) -> Dispatch;
}

/// Runs every computer reply immediately, ignoring the delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

impl TurnScheduler for InlineScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, ticket: ComputerTurn, delay: Duration) -> Dispatch {
        debug!("Dispatching computer turn inline");
        Dispatch::Inline
    }
}

/// Queues tickets for the host to play when it chooses.
#[derive(Debug, Clone, Default)]
pub struct QueuedScheduler {
    pending: VecDeque<ComputerTurn>,
}

impl QueuedScheduler {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest pending ticket.
    pub fn pop(&mut self) -> Option<ComputerTurn> {
        self.pending.pop_front()
    }

    /// Number of tickets waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl TurnScheduler for QueuedScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, ticket: ComputerTurn, delay: Duration) -> Dispatch {
        self.pending.push_back(ticket);
        debug!(pending = self.pending.len(), "Queued computer turn");
        Dispatch::Deferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut scheduler = QueuedScheduler::new();
        let first = ComputerTurn { generation: 1, ply: 1 };
        let second = ComputerTurn { generation: 2, ply: 1 };
        assert_eq!(scheduler.schedule(first, Duration::ZERO), Dispatch::Deferred);
        assert_eq!(scheduler.schedule(second, Duration::ZERO), Dispatch::Deferred);
        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.pop(), Some(first));
        assert_eq!(scheduler.pop(), Some(second));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_inline_ignores_delay() {
        let mut scheduler = InlineScheduler;
        let ticket = ComputerTurn { generation: 1, ply: 1 };
        assert_eq!(
            scheduler.schedule(ticket, Duration::from_secs(60)),
            Dispatch::Inline
        );
    }
}
