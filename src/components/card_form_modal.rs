//! Card Form Modal Component
//!
//! Create and edit form. The draft lives in the deck's selection state, so
//! every keystroke goes through the store and a failed save keeps it.

use leptos::prelude::*;

use deck_core::deck::Modal;
use deck_core::{CardColor, DraftField};

use crate::components::ModalBackdrop;
use crate::context::AppContext;
use crate::models::color_class;
use crate::store::{store_mutate, store_read, store_try, use_app_store};

#[component]
pub fn CardFormModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_open = move || store_read(&store, |deck| deck.selection().modal().draft().is_some());
    let is_editing = move || store_read(&store, |deck| matches!(deck.selection().modal(), Modal::Editing { .. }));
    let field = move |f: DraftField| {
        store_read(&store, |deck| {
            deck.selection()
                .modal()
                .draft()
                .map(|d| d.field(f).to_string())
                .unwrap_or_default()
        })
    };
    let color = move || store_read(&store, |deck| deck.selection().modal().draft().map(|d| d.color).unwrap_or_default());
    let set_field = move |f: DraftField, value: String| {
        store_mutate(&store, |deck| {
            deck.set_draft_field(f, value);
        });
    };
    let close = move || store_mutate(&store, |deck| deck.close_modal());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(Some(id)) = store_try(&store, &ctx, |deck| deck.submit_form()) {
            log::debug!("form saved card {}", id);
        }
    };

    let color_picker = move || {
        CardColor::ALL
            .into_iter()
            .map(|c| {
                let class = move || {
                    if color() == c {
                        format!("color-swatch {} selected", color_class(c))
                    } else {
                        format!("color-swatch {}", color_class(c))
                    }
                };
                view! {
                    <button
                        type="button"
                        class=class
                        title=c.label()
                        on:click=move |_| {
                            store_mutate(&store, |deck| {
                                deck.set_draft_color(c);
                            });
                        }
                    >
                        {c.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=is_open>
            <ModalBackdrop on_close=move |_| close()>
                <form class="modal-content form-modal" on:submit=on_submit>
                    <h2>{move || if is_editing() { "Edit Card" } else { "Create New Card" }}</h2>

                    <label>
                        "Title"
                        <input
                            type="text"
                            placeholder="e.g., Grappled"
                            prop:value=move || field(DraftField::Title)
                            on:input=move |ev| set_field(DraftField::Title, event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Short Summary"
                        <input
                            type="text"
                            placeholder="Quick reminder of what this does"
                            prop:value=move || field(DraftField::Summary)
                            on:input=move |ev| set_field(DraftField::Summary, event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Full Description"
                        <textarea
                            rows="5"
                            placeholder="The full rules text"
                            prop:value=move || field(DraftField::Description)
                            on:input=move |ev| set_field(DraftField::Description, event_target_value(&ev))
                        />
                    </label>

                    <div class="color-picker">
                        <span class="color-picker-label">"Color"</span>
                        {color_picker()}
                    </div>

                    <div class="modal-actions">
                        <button type="submit" class="primary-btn">
                            {move || if is_editing() { "Update Card" } else { "Create Card" }}
                        </button>
                        <button type="button" class="secondary-btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </ModalBackdrop>
        </Show>
    }
}
