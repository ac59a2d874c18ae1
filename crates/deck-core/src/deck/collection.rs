//! Card Collection
//!
//! The ordered card list. Order is display order; it only changes through
//! `push`, `extend`, `remove` and `move_to`.

use crate::domain::{Card, CardId, DomainError, DomainResult, ValidDraft};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    cards: Vec<Card>,
}

impl Collection {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn max_id(&self) -> Option<CardId> {
        self.cards.iter().map(|c| c.id).max()
    }

    /// Append a card; the caller guarantees the id is free
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.contains(card.id));
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.push(card);
        }
    }

    /// Overwrite the editable fields of a card in place
    pub fn replace(&mut self, id: CardId, draft: ValidDraft) -> DomainResult<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::NotFound(id))?;
        card.apply(draft);
        Ok(())
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Move `moved` to the index `target` occupies before the move.
    ///
    /// The removal happens first, so moving a card forward lands it just
    /// after the target and moving it backward lands it just before.
    /// Returns false (and leaves the order alone) when the ids are equal or
    /// either is missing.
    pub fn move_to(&mut self, moved: CardId, target: CardId) -> bool {
        if moved == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(moved), self.position(target)) else {
            return false;
        };
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }
}
