//! LocalStorage-backed key-value store

use crate::error::GameError;
use crate::persistence::KeyValueStore;

/// Per-origin browser storage
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the window's LocalStorage; fails when storage is disabled
    pub fn open() -> Result<Self, GameError> {
        let window = web_sys::window()
            .ok_or_else(|| GameError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| GameError::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| GameError::StorageUnavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        self.storage
            .get_item(key)
            .map_err(|e| GameError::StorageUnavailable(format!("get {key}: {e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GameError::StorageUnavailable(format!("set {key}: {e:?}")))
    }
}
