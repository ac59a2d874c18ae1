//! Local Storage Adapter
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call so the adapter itself stays `Send + Sync`.

use deck_core::domain::{DomainError, DomainResult};
use deck_core::repository::KeyValueStore;

use super::js_error_message;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(to_error: fn(String) -> DomainError) -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| to_error("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| to_error(js_error_message(&e)))?
            .ok_or_else(|| to_error("local storage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage(DomainError::PersistenceRead)?
            .get_item(key)
            .map_err(|e| DomainError::PersistenceRead(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage(DomainError::PersistenceWrite)?
            .set_item(key, value)
            .map_err(|e| DomainError::PersistenceWrite(js_error_message(&e)))
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        Self::storage(DomainError::PersistenceWrite)?
            .remove_item(key)
            .map_err(|e| DomainError::PersistenceWrite(js_error_message(&e)))
    }
}
