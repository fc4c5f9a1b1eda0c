use dashmap::DashMap;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors reported by the storage engine.
///
/// Absence of a key is deliberately not represented here; `get` reports it
/// through `Option` and `delete` treats it as a successful no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("operation cancelled")]
    Cancelled,
}

/// Contract for a key-value store.
///
/// Every operation takes a cancellation token; a token that has already
/// fired aborts the call before any validation or map access.
pub trait KeyValueStore: Send + Sync {
    fn set(&self, cancel: &CancellationToken, key: &str, value: &str) -> Result<(), StoreError>;
    fn get(&self, cancel: &CancellationToken, key: &str) -> Option<String>;
    fn delete(&self, cancel: &CancellationToken, key: &str) -> Result<(), StoreError>;
}

/// In-memory store backed by a concurrent map.
///
/// One instance lives for the lifetime of the `kvstored` process. Writes to
/// the same key are last-writer-wins; there is no versioning and no
/// multi-key atomicity.
pub struct MemoryStore {
    data: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, cancel: &CancellationToken, key: &str, value: &str) -> Result<(), StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, cancel: &CancellationToken, key: &str) -> Option<String> {
        if cancel.is_cancelled() {
            return None;
        }
        self.data.get(key).map(|entry| entry.value().clone())
    }

    fn delete(&self, cancel: &CancellationToken, key: &str) -> Result<(), StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        // Removing an absent key is a no-op success at this layer.
        self.data.remove(key);
        Ok(())
    }
}
