use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::kv::{KeyValueStore, StoreError};

/// In-memory KeyValueStore for testing and hosts without durable storage.
///
/// Clones share the same map, so a test can hand one clone to a session and
/// inspect "durable" state through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("currentUser").is_none());

        store.set("currentUser", "{}").unwrap();
        assert_eq!(store.get("currentUser").as_deref(), Some("{}"));

        store.remove("currentUser").unwrap();
        assert!(store.get("currentUser").is_none());

        // Removing again is fine
        store.remove("currentUser").unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert!(other.contains("k"));
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryStore::with_entry("k", "seed");
        assert_eq!(store.get("k").as_deref(), Some("seed"));
        assert!(!store.contains("other"));
    }
}
