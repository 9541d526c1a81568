use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

/// How long a submission pretends to wait for the server.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Cloneable cancellation flag shared between the form and its pending submission.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            // The sender lives in `self`, so the channel cannot close while we wait.
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Elapsed,
    Cancelled,
}

/// Sequence number handed out by the form for every submission it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub(crate) u64);

/// How a specific submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub id: SubmissionId,
    pub completion: Completion,
}

/// A submission that has passed validation and is waiting out the simulated latency.
#[derive(Debug)]
pub struct PendingSubmission {
    id: SubmissionId,
    token: CancelToken,
    delay: Duration,
}

impl PendingSubmission {
    pub(crate) fn new(id: SubmissionId, token: CancelToken, delay: Duration) -> Self {
        Self { id, token, delay }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn wait(self) -> Finished {
        let completion = if self.token.is_cancelled() {
            Completion::Cancelled
        } else {
            tokio::select! {
                _ = tokio::time::sleep(self.delay) => Completion::Elapsed,
                _ = self.token.cancelled() => Completion::Cancelled,
            }
        };
        Finished {
            id: self.id,
            completion,
        }
    }
}
