//! Per-call deadline and cancellation.
//!
//! A `RequestContext` travels with every client call. The client races the
//! transport future against the context's deadline and cancel signal; when
//! either fires first the transport future is dropped, which aborts the
//! in-flight request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use docbase_core::error::{DocbaseError, DocbaseResult};

/// Deadline and cancellation signal for a client call.
///
/// Cheap to clone; clones share the same cancel signal.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every call made with the paired `RequestContext`.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl RequestContext {
    /// A context with no deadline that cannot be cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context paired with a handle that cancels it.
    pub fn cancellable() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            deadline: None,
            cancel: Some(rx),
        };
        (ctx, CancelHandle { tx: Arc::new(tx) })
    }

    /// Fail calls that have not completed within `timeout` from now.
    /// An earlier existing deadline is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Fail calls that have not completed by `deadline`.
    /// An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, if one is set.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Fail fast when the context is already cancelled or past its deadline.
    pub fn check(&self) -> DocbaseResult<()> {
        if self.is_cancelled() {
            return Err(DocbaseError::Cancelled);
        }
        if self.remaining() == Some(Duration::ZERO) {
            return Err(DocbaseError::deadline_exceeded());
        }
        Ok(())
    }

    /// Drive `fut` to completion unless the context is cancelled or its
    /// deadline passes first, in which case `fut` is dropped.
    pub async fn run<F>(&self, fut: F) -> DocbaseResult<F::Output>
    where
        F: Future,
    {
        self.check()?;

        let cancelled = wait_cancelled(self.cancel.clone());
        let deadline = wait_deadline(self.deadline);

        tokio::select! {
            output = fut => Ok(output),
            _ = cancelled => Err(DocbaseError::Cancelled),
            _ = deadline => Err(DocbaseError::deadline_exceeded()),
        }
    }
}

async fn wait_cancelled(rx: Option<watch::Receiver<bool>>) {
    if let Some(mut rx) = rx {
        let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if fired {
            return;
        }
    }
    // No signal, or every handle was dropped without cancelling.
    std::future::pending::<()>().await
}

async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
