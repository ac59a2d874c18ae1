//! Card Repository
//!
//! Stores the whole card collection as one JSON array under a single key.

use log::debug;

use super::traits::{CollectionRepository, KeyValueStore};
use crate::codec;
use crate::domain::{Card, DomainError, DomainResult};

/// Key used by every released version of the app
pub const DEFAULT_STORAGE_KEY: &str = "deckNotes_cards";

#[derive(Debug, Clone)]
pub struct CardRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CardRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored value, as written by the last save
    pub fn raw(&self) -> DomainResult<Option<String>> {
        self.store.get_item(&self.key)
    }

    pub fn clear(&self) -> DomainResult<()> {
        self.store.remove_item(&self.key)
    }
}

impl<S: KeyValueStore> CollectionRepository<Card> for CardRepository<S> {
    fn load(&self) -> DomainResult<Option<Vec<Card>>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let batch = codec::decode_cards(&raw).map_err(|e| DomainError::PersistenceRead(e.to_string()))?;
        debug!(
            "loaded {} cards from '{}' ({} skipped)",
            batch.cards.len(),
            self.key,
            batch.rejected
        );
        Ok(Some(batch.cards))
    }

    fn save(&self, cards: &[Card]) -> DomainResult<()> {
        let raw = codec::encode_compact(cards)?;
        self.store.set_item(&self.key, &raw)?;
        debug!("saved {} cards to '{}'", cards.len(), self.key);
        Ok(())
    }
}
