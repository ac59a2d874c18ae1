//! Deck Controller
//!
//! Owns the card collection, the selection state and the repository. Every
//! change to the collection is written through to storage in full before
//! the operation returns, then published to subscribers.

mod collection;
mod events;
pub mod selection;

#[cfg(test)]
mod tests;

use log::{debug, error, info, warn};

use crate::codec::{self, ExportFile, ImportReport};
use crate::config::DeckConfig;
use crate::domain::{
    default_cards, sample_pack, Card, CardColor, CardDraft, CardId, Clock, DomainError, DomainResult, DraftField,
    SystemClock,
};
use crate::repository::{CardRepository, CollectionRepository, KeyValueStore};

pub use collection::Collection;
pub use events::{DeckEvent, DeleteOutcome, ListenerId};
pub use selection::{Anchor, DragState, Modal, Selection};

type Listener = Box<dyn Fn(&DeckEvent) + Send + Sync>;

pub struct Deck<S, C = SystemClock> {
    repo: CardRepository<S>,
    clock: C,
    config: DeckConfig,
    cards: Collection,
    selection: Selection,
    seeded: bool,
    last_issued: CardId,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: KeyValueStore> Deck<S, SystemClock> {
    pub fn open(store: S, config: DeckConfig) -> Self {
        Self::open_with_clock(store, config, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Deck<S, C> {
    /// Load the stored deck, falling back to the example cards when storage
    /// is empty or unreadable, and write the result back.
    pub fn open_with_clock(store: S, config: DeckConfig, clock: C) -> Self {
        let repo = CardRepository::new(store, config.storage_key.clone());
        let stored = match repo.load() {
            Ok(Some(cards)) if !cards.is_empty() => {
                // Older imports could store the same id twice; keep the first
                let outcome = codec::merge_new(&[], cards);
                if outcome.duplicates > 0 {
                    warn!("dropped {} stored cards with repeated ids", outcome.duplicates);
                }
                Some(outcome.added)
            }
            Ok(_) => {
                info!("no stored cards under '{}'", repo.key());
                None
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        };
        let seeded = stored.is_none() && config.seed_defaults;
        let cards = match stored {
            Some(cards) => cards,
            None if config.seed_defaults => default_cards(clock.now()),
            None => Vec::new(),
        };
        info!("deck opened with {} cards (defaults: {})", cards.len(), seeded);

        let deck = Self {
            repo,
            clock,
            config,
            cards: Collection::new(cards),
            selection: Selection::default(),
            seeded,
            last_issued: 0,
            listeners: Vec::new(),
            next_listener: 0,
        };
        deck.persist();
        deck
    }

    // ========================
    // Read Access
    // ========================

    pub fn cards(&self) -> &[Card] {
        self.cards.as_slice()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether `open` substituted the example cards
    pub fn seeded_with_defaults(&self) -> bool {
        self.seeded
    }

    /// The card shown in the detail modal, if any
    pub fn viewed_card(&self) -> Option<&Card> {
        self.selection.modal().viewing().and_then(|id| self.cards.get(id))
    }

    /// Text the detail modal's copy button puts on the clipboard
    pub fn copy_text(&self) -> Option<String> {
        self.viewed_card().map(|c| c.description.clone())
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&DeckEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn emit(&self, event: DeckEvent) {
        debug!("deck event: {:?}", event);
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    fn persist(&self) -> bool {
        match self.repo.save(self.cards.as_slice()) {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                self.emit(DeckEvent::PersistFailed(e.to_string()));
                false
            }
        }
    }

    /// Wall-clock id, bumped past anything already issued or in use.
    /// Near `CardId::MAX` the search turns downward instead of overflowing.
    fn issue_id(&mut self) -> CardId {
        let start = self.clock.now_millis().max(self.last_issued.saturating_add(1));
        let free = |id: &CardId| !self.cards.contains(*id);
        // A finite collection always leaves a free id on one side of `start`
        let id = (start..=CardId::MAX)
            .find(free)
            .or_else(|| (CardId::MIN..start).rev().find(free))
            .unwrap_or(start);
        self.last_issued = id;
        id
    }

    // ========================
    // Collection Operations
    // ========================

    pub fn create(&mut self, draft: &CardDraft) -> DomainResult<CardId> {
        let valid = draft.validate()?;
        let id = self.issue_id();
        let card = Card::from_draft(id, valid, self.clock.now());
        info!("created card {} '{}'", id, card.title);
        self.cards.push(card);
        self.persist();
        self.emit(DeckEvent::Created(id));
        Ok(id)
    }

    pub fn update(&mut self, id: CardId, draft: &CardDraft) -> DomainResult<()> {
        let valid = draft.validate()?;
        self.cards.replace(id, valid)?;
        info!("updated card {}", id);
        self.persist();
        self.emit(DeckEvent::Updated(id));
        Ok(())
    }

    /// Two-step delete: the first call marks the card, a second call with
    /// the same id removes it. Calling with another id moves the mark.
    pub fn delete(&mut self, id: CardId) -> DomainResult<DeleteOutcome> {
        if !self.cards.contains(id) {
            return Err(DomainError::NotFound(id));
        }
        if self.selection.pending_delete() != Some(id) {
            self.selection.mark_delete(id);
            self.emit(DeckEvent::DeletePending(id));
            return Ok(DeleteOutcome::Pending);
        }

        self.cards.remove(id);
        self.selection.clear_delete();
        if self.selection.modal().viewing() == Some(id) {
            self.selection.close();
        }
        info!("deleted card {}", id);
        self.persist();
        self.emit(DeckEvent::Deleted(id));
        Ok(DeleteOutcome::Deleted)
    }

    pub fn cancel_delete(&mut self) {
        self.selection.clear_delete();
    }

    /// Move `moved` into the slot `target` occupies. No-op when the ids are
    /// equal or either card is missing.
    pub fn reorder(&mut self, moved: CardId, target: CardId) -> bool {
        if !self.cards.move_to(moved, target) {
            return false;
        }
        debug!("moved card {} to {}", moved, target);
        self.persist();
        self.emit(DeckEvent::Reordered { moved, target });
        true
    }

    // ========================
    // Import / Export
    // ========================

    pub fn export(&self) -> DomainResult<ExportFile> {
        let file = codec::export_file(self.cards.as_slice(), &self.config.export_file_name)?;
        info!("exported {} cards", self.cards.len());
        self.emit(DeckEvent::Exported { count: self.cards.len() });
        Ok(file)
    }

    /// Append every card from `raw` whose id is not already present.
    pub fn import(&mut self, raw: &str) -> DomainResult<ImportReport> {
        let batch = codec::decode_cards(raw).map_err(|e| {
            warn!("import refused: {}", e);
            DomainError::from(e)
        })?;
        let outcome = codec::merge_new(self.cards.as_slice(), batch.cards);
        let report = ImportReport {
            added: outcome.added.len(),
            duplicates: outcome.duplicates,
            rejected: batch.rejected,
        };
        if report.added > 0 {
            self.cards.extend(outcome.added);
            self.persist();
        }
        info!(
            "imported {} cards ({} duplicates, {} rejected)",
            report.added, report.duplicates, report.rejected
        );
        self.emit(DeckEvent::Imported(report));
        Ok(report)
    }

    /// Merge the built-in sample pack and close the About dialog
    pub fn add_sample_cards(&mut self) -> usize {
        let base = self.clock.now_millis();
        let pack = sample_pack(base, self.clock.now());
        let outcome = codec::merge_new(self.cards.as_slice(), pack);
        let added = outcome.added.len();
        if added > 0 {
            let highest = self.cards.max_id().unwrap_or(0).max(base.saturating_add(20));
            self.last_issued = self.last_issued.max(highest);
            self.cards.extend(outcome.added);
            self.persist();
        }
        self.selection.close();
        self.emit(DeckEvent::SamplesAdded(added));
        added
    }

    // ========================
    // Modal Flow
    // ========================

    pub fn open_create_form(&mut self) {
        self.selection.open_create();
    }

    pub fn view_card(&mut self, id: CardId, anchor: Option<Anchor>) -> bool {
        self.cards.contains(id) && self.selection.open_view(id, anchor)
    }

    /// Switch from the detail view to the edit form
    pub fn edit_viewed_card(&mut self) -> bool {
        let Some(card) = self.viewed_card().cloned() else {
            return false;
        };
        self.selection.open_edit(&card);
        true
    }

    pub fn open_about(&mut self) {
        self.selection.open_about();
    }

    /// Close the open modal (also what a backdrop click does)
    pub fn close_modal(&mut self) {
        self.selection.close();
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: String) -> bool {
        match self.selection.draft_mut() {
            Some(draft) => {
                draft.set_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn set_draft_color(&mut self, color: CardColor) -> bool {
        match self.selection.draft_mut() {
            Some(draft) => {
                draft.color = color;
                true
            }
            None => false,
        }
    }

    /// Save the open form. The modal closes on success and stays open with
    /// its draft on failure. `Ok(None)` when no form is open.
    pub fn submit_form(&mut self) -> DomainResult<Option<CardId>> {
        let id = match self.selection.modal().clone() {
            Modal::Creating { draft } => self.create(&draft)?,
            Modal::Editing { card_id, draft } => {
                self.update(card_id, &draft)?;
                card_id
            }
            _ => return Ok(None),
        };
        self.selection.close();
        Ok(Some(id))
    }

    // ========================
    // Drag and Drop
    // ========================

    pub fn drag_start(&mut self, id: CardId) {
        if self.cards.contains(id) {
            self.selection.begin_drag(id);
        }
    }

    pub fn drag_enter(&mut self, id: CardId) {
        self.selection.drag_enter(id);
    }

    pub fn drag_leave(&mut self) {
        self.selection.drag_leave();
    }

    /// Drop the dragged card onto `target`. Drag state is cleared whatever
    /// the outcome.
    pub fn drop_on(&mut self, target: CardId) -> bool {
        match self.selection.end_drag() {
            Some(moved) => self.reorder(moved, target),
            None => false,
        }
    }

    pub fn drag_end(&mut self) {
        self.selection.end_drag();
    }
}
