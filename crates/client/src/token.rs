//! In-memory bearer credential holder
//!
//! Holds at most one credential string. There is no client-side expiry
//! logic: a 401/403 response is the expiry signal, handled by the request
//! wrapper. The store is injected into the client rather than living as a
//! module-level global so tests can run against isolated sessions.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared holder for the current bearer token.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the held credential. `None` clears it.
    pub fn set(&self, token: Option<String>) {
        *self.lock() = token;
    }

    /// Current credential, if any.
    pub fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.set(None);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a panicking thread held it; the token
        // itself is still valid state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let store = TokenStore::new();
        assert_eq!(store.get(), None);
        store.set(Some("tok-1".to_string()));
        assert_eq!(store.get().as_deref(), Some("tok-1"));
        store.set(Some("tok-2".to_string()));
        assert_eq!(store.get().as_deref(), Some("tok-2"));
    }

    #[test]
    fn test_clear() {
        let store = TokenStore::new();
        store.set(Some("tok".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = TokenStore::new();
        let other = store.clone();
        store.set(Some("tok".to_string()));
        assert_eq!(other.get().as_deref(), Some("tok"));
    }
}
