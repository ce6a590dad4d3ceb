//! Discriminated screen state and its observable holder.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::trace;

use crate::scope::ScopeToken;

/// What a screen is currently showing.
///
/// Exactly one variant is current. `Loading` is entered before every
/// repository call and left exactly once per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum ViewState<T, E = String> {
    /// Nothing requested yet.
    Idle,
    /// A repository call is in flight.
    Loading,
    /// The last call completed with this payload.
    Success(T),
    /// The last call failed.
    Error(E),
}

impl<T, E> ViewState<T, E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// True once a call has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, ViewState::Success(_) | ViewState::Error(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            ViewState::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Fixed error marker for screens that show no failure detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadFailed;

impl fmt::Display for LoadFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load data")
    }
}

/// Observable holder for one screen's state.
///
/// Cloning shares the same underlying channel.
#[derive(Debug)]
pub struct StateHolder<T, E = String> {
    tx: Arc<watch::Sender<ViewState<T, E>>>,
}

impl<T, E> Clone for StateHolder<T, E> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T, E> StateHolder<T, E>
where
    T: Clone,
    E: Clone,
{
    pub fn new(initial: ViewState<T, E>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> ViewState<T, E> {
        self.tx.borrow().clone()
    }

    /// Replace the current state.
    pub fn set(&self, state: ViewState<T, E>) {
        self.tx.send_replace(state);
    }

    /// Replace the current state unless the owning scope has been cancelled.
    ///
    /// Returns whether the state was applied.
    pub fn publish(&self, token: &ScopeToken, state: ViewState<T, E>) -> bool {
        if token.is_cancelled() {
            trace!("scope cancelled, discarding state");
            return false;
        }
        self.set(state);
        true
    }

    /// Receiver that observes every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T, E>> {
        self.tx.subscribe()
    }

    /// Wait until the state is `Success` or `Error`, then return it.
    pub async fn settled(&self) -> ViewState<T, E> {
        let mut rx = self.tx.subscribe();
        let settled = rx.wait_for(ViewState::is_settled).await.map(|s| s.clone());
        // The sender lives in `self`, so the channel cannot close while waiting.
        settled.unwrap_or_else(|_| self.get())
    }
}
