//! Key-value draft storage
//!
//! The wizard keeps exactly one blob per key and overwrites it on every save.
//! Backends: `MemoryStore` here, `FileStore`/`LocalStorageStore` in `platform`.

use std::collections::HashMap;

use thiserror::Error;

/// Storage failures. All of them are recoverable from the wizard's view.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend missing (no `localStorage`, private mode, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the write (quota exceeded, read-only, ...)
    #[error("storage rejected write: {0}")]
    Rejected(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// String blob persistence by key
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` unconditionally
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
