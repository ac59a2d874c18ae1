//! Card Detail Modal Component
//!
//! Full view of one card with copy, edit and delete actions. Grows out of
//! the clicked tile; the frame stays mounted while the deck changes
//! underneath, so the animation only plays on open.

use leptos::prelude::*;
use leptos::task::spawn_local;

use deck_core::{Card, CardColor};

use crate::commands;
use crate::components::{DeleteConfirmButton, ModalBackdrop};
use crate::context::AppContext;
use crate::models::color_class;
use crate::store::{store_mutate, store_read, use_app_store};

#[component]
pub fn CardDetailModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let viewed_id = move || store_read(&store, |deck| deck.viewed_card().map(|c| c.id));
    let is_open = move || viewed_id().is_some();
    let text = move |pick: fn(&Card) -> String| {
        store_read(&store, |deck| deck.viewed_card().map(pick).unwrap_or_default())
    };
    let header_class = move || {
        let color = store_read(&store, |deck| deck.viewed_card().map(|c| c.color)).unwrap_or(CardColor::Blue);
        format!("detail-header {}", color_class(color))
    };
    let origin_style = move || {
        store_read(&store, |deck| deck.selection().anchor())
            .map(|a| format!("transform-origin: {}px {}px;", a.x, a.y))
            .unwrap_or_default()
    };
    let card_id = Signal::derive(move || viewed_id().unwrap_or_default());
    let close = move || store_mutate(&store, |deck| deck.close_modal());

    let copy = move |_| {
        let Some(text) = store_read(&store, |deck| deck.copy_text()) else { return };
        spawn_local(async move {
            match commands::copy_text(&text).await {
                Ok(()) => {
                    log::info!("copied {} characters", text.chars().count());
                    ctx.notify("Copied to clipboard");
                }
                Err(e) => {
                    log::error!("{}", e);
                    ctx.notify_error(e.to_string());
                }
            }
        });
    };

    view! {
        <Show when=is_open>
            <ModalBackdrop on_close=move |_| close()>
                <div class="modal-content detail-modal" style=origin_style>
                    <div class=header_class>
                        <h2>{move || text(|c| c.title.clone())}</h2>
                        <p class="detail-summary">{move || text(|c| c.summary.clone())}</p>
                    </div>
                    <div class="detail-body">
                        <h3>"Description:"</h3>
                        <p class="detail-description">{move || text(|c| c.description.clone())}</p>
                    </div>
                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=copy>"Copy Text"</button>
                        <button
                            class="secondary-btn"
                            on:click=move |_| {
                                store_mutate(&store, |deck| {
                                    deck.edit_viewed_card();
                                });
                            }
                        >
                            "Edit"
                        </button>
                        <DeleteConfirmButton card_id=card_id />
                        <button class="secondary-btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </ModalBackdrop>
        </Show>
    }
}
