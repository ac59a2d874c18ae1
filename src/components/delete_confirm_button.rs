//! Delete Confirm Button Component
//!
//! Inline two-step delete for the card detail modal.

use leptos::prelude::*;

use deck_core::{CardId, DeleteOutcome};

use crate::context::AppContext;
use crate::store::{store_mutate, store_read, store_try, use_app_store};

/// Two-step delete button
///
/// Shows "Delete" initially. The first click marks the card in the deck and
/// the button turns into "Confirm Delete" with a ✗ to back out; a second
/// click removes the card. The mark lives in the deck, so closing the
/// modal clears it.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] card_id: Signal<CardId>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let pending = move || {
        let card_id = card_id.get();
        store_read(&store, |deck| deck.selection().pending_delete() == Some(card_id))
    };

    view! {
        <button
            class=move || if pending() { "delete-btn confirm" } else { "delete-btn" }
            on:click=move |ev| {
                ev.stop_propagation();
                let card_id = card_id.get_untracked();
                if let Some(DeleteOutcome::Deleted) = store_try(&store, &ctx, |deck| deck.delete(card_id)) {
                    log::debug!("card {} removed from detail view", card_id);
                }
            }
        >
            {move || if pending() { "Confirm Delete" } else { "Delete" }}
        </button>
        <Show when=pending>
            <button
                class="cancel-btn"
                title="Keep card"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_mutate(&store, |deck| deck.cancel_delete());
                }
            >
                "✗"
            </button>
        </Show>
    }
}
