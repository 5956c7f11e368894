//! Guard against stale list responses.
//!
//! Filter or page changes fire a new request without cancelling the one in
//! flight; a slow earlier response must not overwrite newer state. Each
//! fetch takes a token from the guard and applies its result only while
//! that token is still the latest issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RequestGuard {
    vigente: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every previously issued token becomes stale.
    pub fn issue(&self) -> RequestToken {
        let token = self.vigente.fetch_add(1, Ordering::Relaxed) + 1;
        RequestToken {
            token,
            vigente: Arc::clone(&self.vigente),
        }
    }
}

#[derive(Clone)]
pub struct RequestToken {
    token: u64,
    vigente: Arc<AtomicU64>,
}

impl RequestToken {
    /// True while no newer request has been issued from the same guard.
    pub fn is_current(&self) -> bool {
        self.vigente.load(Ordering::Relaxed) == self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_token_wins() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        assert!(first.is_current());

        let second = guard.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn guards_are_independent() {
        let a = RequestGuard::new();
        let b = RequestGuard::new();
        let token_a = a.issue();
        let _token_b = b.issue();
        assert!(token_a.is_current());
    }
}
