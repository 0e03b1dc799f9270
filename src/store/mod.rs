//! Persisted key-value state.
//!
//! The site keeps three pieces of state across runs: the theme
//! preference, the cumulative view count, and the last-visit timestamp.
//! All of it goes through the [`KvStore`] trait so the owning components
//! take the store as a dependency instead of reaching for a global, and
//! tests can substitute [`MemoryStore`].
//!
//! Values are plain strings. Missing or malformed values are treated as
//! absent by the callers; nothing here raises on bad data.

mod file;

pub use file::FileStore;

use std::collections::HashMap;

/// Key for the persisted theme preference (`"light"` or `"dark"`).
pub const KEY_THEME: &str = "theme";

/// Key for the cumulative page view counter.
pub const KEY_PAGE_VIEWS: &str = "page_views";

/// Key for the last-visit marker (epoch milliseconds as a string).
pub const KEY_LAST_VISIT: &str = "last_visit";

/// A string-keyed, string-valued persistent store.
///
/// Writes are best-effort: implementations log failures rather than
/// propagate them, matching the site's tolerance for lost counter
/// updates.
pub trait KvStore {
    /// Read a value, or `None` if the key has never been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(KEY_THEME), None);

        store.set(KEY_THEME, "dark");
        assert_eq!(store.get(KEY_THEME), Some("dark".to_string()));

        store.set(KEY_THEME, "light");
        assert_eq!(store.get(KEY_THEME), Some("light".to_string()));
    }

    #[test]
    fn test_memory_store_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.set(KEY_PAGE_VIEWS, "5");
        assert_eq!(store.get(KEY_LAST_VISIT), None);
        assert_eq!(store.get(KEY_PAGE_VIEWS), Some("5".to_string()));
    }
}
