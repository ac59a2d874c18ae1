//! In-memory key-value store
//!
//! Clones share the same map, so a test can keep a handle and inspect what
//! a `Deck` wrote.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut data) = store.data.lock() {
            data.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.data.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.data
            .lock()
            .map_err(|e| DomainError::PersistenceRead(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::PersistenceWrite("storage quota exceeded".to_string()));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
