mod memory;

pub use memory::MemoryStorage;

/// A persistent string key-value store.
///
/// Reading a missing key is not an error, and neither is removing one.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key` from the store.
    fn unset(&mut self, key: &str);
}
