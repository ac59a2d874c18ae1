//! Card Grid Component
//!
//! Displays the deck in display order with mouse drag-and-drop reordering.
//! Uses leptos-dragdrop; the deck's own drag state drives the styling.

use leptos::prelude::*;

use deck_core::Card;
use leptos_dragdrop::bind_global_handlers;

use crate::components::CardTile;
use crate::context::AppContext;
use crate::store::{store_mutate, store_peek, store_read, use_app_store};

#[component]
pub fn CardGrid() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = ctx.dnd;

    bind_global_handlers(
        dnd,
        move |id| {
            log::debug!("[DND] drag start: {}", id);
            store_mutate(&store, |deck| deck.drag_start(id));
        },
        move |dragged, target| {
            log::debug!("[DND] drop: dragged={}, target={:?}", dragged, target);
            store_mutate(&store, |deck| match target {
                Some(target) => {
                    deck.drop_on(target);
                }
                None => deck.drag_end(),
            });
        },
    );

    // Mirror the hovered tile into the deck's drag state
    Effect::new(move |_| {
        let over = dnd.drop_target_read.get();
        if store_peek(&store, |deck| deck.selection().drag().over) == over {
            return;
        }
        store_mutate(&store, |deck| match over {
            Some(id) => deck.drag_enter(id),
            None => deck.drag_leave(),
        });
    });

    let cards = move || store_read(&store, |deck| deck.cards().to_vec());
    let has_cards = move || store_read(&store, |deck| !deck.is_empty());

    view! {
        <Show when=has_cards fallback=|| view! { <EmptyDeck /> }>
            <div class="card-grid">
                <For
                    each=cards
                    // Every displayed field, so edits re-render the tile
                    key=|card: &Card| (card.id, card.title.clone(), card.summary.clone(), card.color)
                    children=move |card: Card| view! { <CardTile card=card /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn EmptyDeck() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="empty-deck">
            <p>"No cards yet. Create your first card to get started!"</p>
            <button
                class="primary-btn"
                on:click=move |_| store_mutate(&store, |deck| deck.open_create_form())
            >
                "Create First Card"
            </button>
        </div>
    }
}
