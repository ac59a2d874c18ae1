//! DeckNotes Frontend App
//!
//! Header, card grid and the three dialogs over a single deck store.

use leptos::prelude::*;
use reactive_stores::Store;

use deck_core::DeckConfig;

use crate::components::{AboutModal, CardDetailModal, CardFormModal, CardGrid, HeaderBar, NoticeBar};
use crate::context::{AppContext, Notice};
use crate::store::AppState;

#[component]
pub fn App(config: DeckConfig) -> impl IntoView {
    let notice = signal::<Option<Notice>>(None);
    let ctx = AppContext::new(notice);
    provide_context(ctx);

    let mut state = AppState::new(config);
    if state.deck.seeded_with_defaults() {
        log::info!("starting with the example deck");
    }
    // Deck events (import results, storage failures) end up in the notice bar
    state.deck.subscribe(move |event| ctx.notify_event(event));
    provide_context(Store::new(state));

    view! {
        <div class="app-layout">
            <HeaderBar />
            <main class="main-content">
                <CardGrid />
            </main>
            <CardFormModal />
            <CardDetailModal />
            <AboutModal />
            <NoticeBar />
        </div>
    }
}
