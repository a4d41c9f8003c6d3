//! Tokio-backed scheduling of the computer's reply.

use std::time::Duration;

use minimax_tictactoe::{ComputerTurn, Dispatch, TurnScheduler};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Sends each ticket back to the UI loop after the configured delay.
///
/// The UI draws the human's mark while the timer runs, then plays the
/// ticket when it arrives on the channel.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ComputerTurn>,
}

impl TokioScheduler {
    /// Creates a scheduler feeding `tx`.
    pub fn new(tx: mpsc::UnboundedSender<ComputerTurn>) -> Self {
        Self { tx }
    }
}

impl TurnScheduler for TokioScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, ticket: ComputerTurn, delay: Duration) -> Dispatch {
        deliver_later(self.tx.clone(), ticket, delay);
        Dispatch::Deferred
    }
}

fn deliver_later(
    tx: mpsc::UnboundedSender<ComputerTurn>,
    ticket: ComputerTurn,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(ticket).is_err() {
            debug!(?ticket, "UI loop gone, dropping computer turn");
        }
    })
}
