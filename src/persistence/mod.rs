//! Key-value persistence
//!
//! The game persists a single value (the best score), so the store is a
//! plain string map. Browser builds back it with LocalStorage
//! (`platform::storage`); tests and the native demo use [`MemoryStore`].

use std::collections::HashMap;

use crate::error::GameError;

/// A string key-value store scoped to one client
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        (**self).set(key, value)
    }
}
