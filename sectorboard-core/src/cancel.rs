//! Cancellation for in-flight view fetches.
//!
//! Each view activation opens a [`ViewScope`]. The scope's [`CancelToken`]
//! travels with the fetch request; dropping the scope (navigating away,
//! reloading, quitting) cancels the token so a late response is discarded
//! instead of landing in a view that no longer exists.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Identifies one view activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// Handle owned by the active view; cancels its token on drop.
#[derive(Debug)]
pub struct ViewScope {
    ticket: Ticket,
    token: CancelToken,
}

impl ViewScope {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// A token to hand to the fetch.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Does a response carrying `ticket` belong to this scope?
    pub fn owns(&self, ticket: Ticket) -> bool {
        self.ticket == ticket && !self.token.is_cancelled()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Hands out scopes with increasing tickets.
#[derive(Debug, Default)]
pub struct ScopeIssuer {
    next: AtomicU64,
}

impl ScopeIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> ViewScope {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ViewScope {
            ticket: Ticket(id),
            token: CancelToken::new(),
        }
    }
}
