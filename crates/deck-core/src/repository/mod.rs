//! Repository Layer
//!
//! Persistence abstractions and the implementations that do not need a
//! browser.

mod traits;
mod memory_store;
mod card_repo;


pub use traits::{CollectionRepository, KeyValueStore};
pub use memory_store::MemoryStore;
pub use card_repo::{CardRepository, DEFAULT_STORAGE_KEY};
