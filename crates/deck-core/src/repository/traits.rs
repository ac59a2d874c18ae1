//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{DomainResult, Entity};

/// String key-value store (the shape of `window.localStorage`)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    fn remove_item(&self, key: &str) -> DomainResult<()>;
}

/// Whole-collection persistence
///
/// The collection is always read and written as a unit; there are no
/// per-entity writes.
pub trait CollectionRepository<T: Entity> {
    /// `None` when nothing has been stored yet
    fn load(&self) -> DomainResult<Option<Vec<T>>>;

    /// Replace the stored collection
    fn save(&self, entities: &[T]) -> DomainResult<()>;
}
