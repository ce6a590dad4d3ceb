//! Lifecycle scope for view-model tasks.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, debug_span};

/// Handle to a launched unit of work.
///
/// Resolves to `None` when the owning scope was cancelled before the work
/// finished.
pub type Job<T = ()> = JoinHandle<Option<T>>;

#[derive(Debug, Default)]
struct ScopeInner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Owns the lifetime of every task a view model launches.
///
/// Created with the view model and cancelled when it is dropped. Tasks hold a
/// [`ScopeToken`] and check it before publishing a result.
#[derive(Debug, Default)]
pub struct Scope {
    inner: Arc<ScopeInner>,
}

/// Cheap, cloneable view of a [`Scope`]'s cancellation flag.
#[derive(Debug, Clone)]
pub struct ScopeToken {
    inner: Arc<ScopeInner>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Cancel the scope. Idempotent.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            debug!("scope cancelled");
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Spawn `work` on the current Tokio runtime, bound to this scope.
    ///
    /// If the scope is cancelled while the work is pending, the work is
    /// dropped at its next suspension point and the job resolves to `None`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn launch<F>(&self, task: &'static str, work: F) -> Job<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let token = self.token();
        let span = debug_span!("task", name = task);

        tokio::spawn(
            async move {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("abandoned");
                        None
                    }
                    output = work => Some(output),
                }
            }
            .instrument(span),
        )
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl ScopeToken {
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Completes once the scope is cancelled.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the flag so a concurrent cancel is not missed.
            notified.as_mut().enable();

            if self.is_cancelled() {
                return;
            }

            notified.await;
        }
    }
}
