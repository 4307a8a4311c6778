//! Durable client storage abstraction
//!
//! The browser build backs this with `localStorage` (see `ui::browser`),
//! tests and the server use [`MemoryStore`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Persisted theme preference: `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";
/// Epoch milliseconds of the most recent OTP dispatch
pub const OTP_LAST_SENT_KEY: &str = "otpLastSentTime";
/// Remaining cool-down seconds, written every tick. Advisory only, never read back.
pub const OTP_COUNTDOWN_KEY: &str = "otpCountdown";
/// Fallback CSRF token when no navigation state is available
pub const CSRF_TOKEN_KEY: &str = "csrfToken";

/// String-keyed, string-valued synchronous storage
///
/// Writes are best effort: a full or disabled store silently drops them,
/// the same way a browser `localStorage` quota error would.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// Read an epoch-milliseconds value, ignoring anything that does not parse
pub fn read_epoch_ms(store: &impl KeyValueStore, key: &str) -> Option<i64> {
    store.get(key)?.trim().parse().ok()
}

/// Forget the CSRF token and OTP bookkeeping on sign-out. The theme stays.
pub fn clear_auth_session(store: &impl KeyValueStore) {
    for key in [CSRF_TOKEN_KEY, OTP_LAST_SENT_KEY, OTP_COUNTDOWN_KEY] {
        store.remove(key);
    }
}

/// Persist the CSRF token of the current auth step. `None` drops any token
/// left over from an earlier session.
pub fn store_csrf_token(store: &impl KeyValueStore, token: Option<&str>) {
    match token {
        Some(token) => store.set(CSRF_TOKEN_KEY, token),
        None => store.remove(CSRF_TOKEN_KEY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(store.len(), 1);

        store.remove(THEME_KEY);
        assert!(store.get(THEME_KEY).is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        other.set(CSRF_TOKEN_KEY, "abc");
        assert!(store.contains(CSRF_TOKEN_KEY));
    }

    #[test]
    fn test_read_epoch_ms() {
        let store = MemoryStore::with_entries([
            (OTP_LAST_SENT_KEY, "1700000000000"),
            (OTP_COUNTDOWN_KEY, "soon"),
        ]);

        assert_eq!(
            read_epoch_ms(&store, OTP_LAST_SENT_KEY),
            Some(1_700_000_000_000)
        );
        assert_eq!(read_epoch_ms(&store, OTP_COUNTDOWN_KEY), None);
        assert_eq!(read_epoch_ms(&store, "missing"), None);
    }

    #[test]
    fn test_clear_auth_session_keeps_theme() {
        let store = MemoryStore::with_entries([
            (THEME_KEY, "dark"),
            (CSRF_TOKEN_KEY, "abc"),
            (OTP_LAST_SENT_KEY, "1700000000000"),
            (OTP_COUNTDOWN_KEY, "12"),
        ]);

        clear_auth_session(&store);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_store_csrf_token_replaces_or_clears() {
        let store = MemoryStore::with_entries([(CSRF_TOKEN_KEY, "previous")]);

        store_csrf_token(&store, Some("fresh"));
        assert_eq!(store.get(CSRF_TOKEN_KEY).as_deref(), Some("fresh"));

        store_csrf_token(&store, None);
        assert!(!store.contains(CSRF_TOKEN_KEY));
    }
}
