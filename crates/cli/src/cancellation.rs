//! Cancellation on Ctrl+C.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token checked between work items and
//!   raced against search job waits.
//! - Define the `Cancelled` marker error carried through `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing the signal handler (see `main.rs`).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token (idempotent).
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token is cancelled.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// cancel between the two is not missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// `Err(Cancelled)` if cancellation was requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// True if this error (or anything in its chain) is a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Cancelled>())
}

/// Print the standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancellationToken::new();
        assert!(token.check().is_ok());
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.check().is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });
        tokio::task::yield_now().await;
        token.cancel();
        handle.await.unwrap();
    }

    #[test]
    fn test_is_cancelled_error_sees_through_context() {
        let err = Err::<(), _>(Cancelled)
            .context("while listing apps")
            .unwrap_err();
        assert!(is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("boom")));
    }
}
