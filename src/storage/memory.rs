use std::collections::HashMap;

use super::KeyValueStore;

/// [`KeyValueStore`] kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        tracing::trace!(key, "storage set");
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn unset(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            tracing::trace!(key, "storage unset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("highscore"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStorage::new();
        store.set("highscore", "1200");
        assert_eq!(store.get("highscore").as_deref(), Some("1200"));

        store.set("highscore", "1500");
        assert_eq!(store.get("highscore").as_deref(), Some("1500"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_key_and_value_are_valid() {
        let mut store = MemoryStorage::new();
        store.set("", "");
        assert_eq!(store.get("").as_deref(), Some(""));
    }

    #[test]
    fn unset_removes_and_tolerates_missing_keys() {
        let mut store = MemoryStorage::new();
        store.set("level", "3");
        store.unset("level");
        store.unset("never-set");
        assert_eq!(store.get("level"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn works_through_trait_object() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStorage::new());
        store.set("name", "prophecy");
        assert_eq!(store.get("name").as_deref(), Some("prophecy"));
    }

    #[test]
    fn clear_drops_everything() {
        let mut store = MemoryStorage::new();
        store.set("a", "1");
        store.set("b", "2");
        store.clear();
        assert_eq!(store.len(), 0);
    }
}
