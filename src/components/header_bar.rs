//! Header Bar Component
//!
//! App title plus the About, new card, export and import actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use deck_core::codec;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_mutate, store_read, store_try, use_app_store};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let export_cards = move |_| {
        let file = match store_read(&store, |deck| deck.export()) {
            Ok(file) => file,
            Err(e) => {
                log::error!("{}", e);
                ctx.notify_error(e.to_string());
                return;
            }
        };
        if let Err(e) = commands::download(&file) {
            log::error!("{}", e);
            ctx.notify_error(e.to_string());
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Reset so choosing the same file again still fires `change`
        input.set_value("");
        let Some(file) = file else { return };

        let name = file.name();
        if !codec::accepts_file_name(&name) {
            log::warn!("import skipped: '{}' is not a .json or .txt file", name);
            ctx.notify_error("Invalid file format. Choose a .json or .txt export.");
            return;
        }
        log::info!("importing '{}' ({} bytes)", name, file.size());
        spawn_local(async move {
            match commands::read_file_text(file).await {
                Ok(text) => {
                    store_try(&store, &ctx, |deck| deck.import(&text));
                }
                Err(e) => {
                    log::error!("{}", e);
                    ctx.notify_error(e.to_string());
                }
            }
        });
    };

    view! {
        <header class="header-bar">
            <div class="header-title">
                <h1>"DeckNotes"</h1>
                <p class="tagline">"Get your game on deck!"</p>
            </div>
            <div class="header-actions">
                <button
                    class="icon-btn about-btn"
                    title="About & Feedback"
                    on:click=move |_| store_mutate(&store, |deck| deck.open_about())
                >
                    "i"
                </button>
                <button
                    class="primary-btn"
                    on:click=move |_| store_mutate(&store, |deck| deck.open_create_form())
                >
                    "+Card"
                </button>
                <button class="icon-btn" title="Export cards" on:click=export_cards>
                    "⬆"
                </button>
                <button
                    class="icon-btn"
                    title="Import cards"
                    on:click=move |_| {
                        if let Some(input) = file_input.get() {
                            input.click();
                        }
                    }
                >
                    "⬇"
                </button>
                <input
                    node_ref=file_input
                    type="file"
                    class="hidden"
                    accept=codec::IMPORT_ACCEPT
                    on:change=on_file_change
                />
            </div>
        </header>
    }
}
