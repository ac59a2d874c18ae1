//! Modal Backdrop Component
//!
//! Dimmed full-screen layer behind every dialog.

use leptos::prelude::*;

/// Backdrop that closes its dialog when the dim area itself is clicked.
/// Clicks that bubble up from the dialog content are ignored.
#[component]
pub fn ModalBackdrop(
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop"
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.target() == ev.current_target() {
                    on_close.run(());
                }
            }
        >
            {children()}
        </div>
    }
}
