//! FIFO delivery of assistant replies.
//!
//! A single worker drains the queue in send order. Each reply becomes due a
//! fixed latency after its message was sent, so later messages never
//! overtake earlier ones.

use std::sync::Weak;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::app::{AmhpApp, Shared};

/// A user message waiting for its reply.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub text: String,
    pub due: Instant,
    pub epoch: u64,
}

#[derive(Debug, Clone)]
pub struct ReplyQueue {
    tx: mpsc::UnboundedSender<PendingReply>,
}

impl ReplyQueue {
    /// Creates the queue and its receiving end for the worker.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PendingReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn enqueue(&self, reply: PendingReply) {
        if self.tx.send(reply).is_err() {
            tracing::warn!("Reply worker has stopped, dropping reply");
        }
    }
}

/// Spawns the worker. It exits when the app is dropped or shut down.
pub(crate) fn spawn_worker(
    app: Weak<Shared>,
    mut rx: mpsc::UnboundedReceiver<PendingReply>,
    shutdown: CancellationToken,
) {
    tokio::spawn(async move {
        loop {
            let pending = tokio::select! {
                _ = shutdown.cancelled() => break,
                next = rx.recv() => match next {
                    Some(pending) => pending,
                    None => break,
                },
            };

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep_until(pending.due) => {}
            }

            let Some(shared) = app.upgrade() else {
                break;
            };
            AmhpApp::from_shared(shared).deliver_reply(pending).await;
        }
        tracing::debug!("Reply worker stopped");
    });
}
