//! Card Tile Component
//!
//! One card in the grid: title and summary on the card's color. A click
//! opens the detail view; a press-and-move starts a drag instead.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use deck_core::deck::Anchor;
use deck_core::Card;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseenter, make_on_mouseleave};

use crate::context::AppContext;
use crate::models::color_class;
use crate::store::{store_mutate, store_read, use_app_store};

/// Center of the clicked tile, used as the modal's transform origin
fn anchor_of(ev: &web_sys::MouseEvent) -> Option<Anchor> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(Anchor {
        x: rect.left() + rect.width() / 2.0,
        y: rect.top() + rect.height() / 2.0,
    })
}

#[component]
pub fn CardTile(card: Card) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = ctx.dnd;
    let id = card.id;
    let color = card.color;

    let tile_class = move || {
        let drag = store_read(&store, |deck| deck.selection().drag());
        let mut class = format!("card-tile {}", color_class(color));
        if drag.dragged == Some(id) {
            class.push_str(" dragging");
        }
        if drag.over == Some(id) {
            class.push_str(" drag-over");
        }
        if drag.is_active() {
            class.push_str(" grabbing");
        }
        class
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        // Swallow the click that trails a drop
        if dnd.just_ended() {
            return;
        }
        let anchor = anchor_of(&ev);
        store_mutate(&store, |deck| {
            deck.view_card(id, anchor);
        });
    };

    view! {
        <div
            class=tile_class
            on:mousedown=make_on_mousedown(dnd, id)
            on:mouseenter=make_on_mouseenter(dnd, id)
            on:mouseleave=make_on_mouseleave(dnd)
            on:click=on_click
        >
            <h3 class="card-title">{card.title}</h3>
            <p class="card-summary">{card.summary}</p>
        </div>
    }
}
