//! Liveness token for async continuations
//!
//! A view creates one token when it mounts and invalidates it on cleanup.
//! Anything resolving later (a fetch, a delayed redirect, a timer callback)
//! checks the token before touching the view's state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the owning view as torn down. Idempotent.
    pub fn invalidate(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Run `f` only while the owner is still mounted
    pub fn guard<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_alive().then(f)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_alive() {
        let token = Liveness::new();
        assert!(token.is_alive());
        assert_eq!(token.guard(|| 42), Some(42));
    }

    #[test]
    fn test_invalidate_is_shared_between_clones() {
        let token = Liveness::new();
        let continuation = token.clone();

        token.invalidate();
        token.invalidate();

        assert!(!continuation.is_alive());
        let mut ran = false;
        assert_eq!(continuation.guard(|| ran = true), None);
        assert!(!ran);
    }
}
