//! Global Application State Store
//!
//! Uses Leptos reactive_stores. The deck is one field: any write to it
//! re-runs every view that read it.

use leptos::prelude::*;
use reactive_stores::Store;

use deck_core::{Deck, DeckConfig, DomainResult};

use crate::commands::BrowserStore;

/// Global application state with field-level reactivity
#[derive(Store)]
pub struct AppState {
    /// Cards, selection state and persistence
    pub deck: Deck<BrowserStore>,
}

impl AppState {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            deck: Deck::open(BrowserStore, config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a mutation on the deck and notify readers
pub fn store_mutate<R>(store: &AppStore, f: impl FnOnce(&mut Deck<BrowserStore>) -> R) -> R {
    let binding = store.deck();
    let mut deck = binding.write();
    f(&mut deck)
}

/// Run a fallible mutation, reporting any error in the notice bar
pub fn store_try<R>(
    store: &AppStore,
    ctx: &crate::context::AppContext,
    f: impl FnOnce(&mut Deck<BrowserStore>) -> DomainResult<R>,
) -> Option<R> {
    let result = store_mutate(store, f);
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}", e);
            ctx.notify_error(e.to_string());
            None
        }
    }
}

/// Read from the deck, tracking the store field
pub fn store_read<R>(store: &AppStore, f: impl FnOnce(&Deck<BrowserStore>) -> R) -> R {
    let deck = store.deck().read();
    f(&deck)
}

/// Read from the deck without subscribing the current observer
pub fn store_peek<R>(store: &AppStore, f: impl FnOnce(&Deck<BrowserStore>) -> R) -> R {
    let deck = store.deck().read_untracked();
    f(&deck)
}
