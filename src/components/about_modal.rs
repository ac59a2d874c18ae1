//! About Modal Component
//!
//! App description, the sample pack generator, a feature overview and the
//! tail of the in-memory log.

use leptos::prelude::*;

use deck_core::deck::Modal;

use crate::components::ModalBackdrop;
use crate::store::{store_mutate, store_read, use_app_store};

const FEEDBACK_URL: &str = "https://forms.gle/2pn6kgTh4FDHhpwQ9";

/// Log lines shown under "Diagnostics"
const DIAGNOSTIC_LINES: usize = 30;

const FEATURES: &[(&str, &str, &str)] = &[
    ("Custom Cards", "text-blue", "Each card has a title, a short summary, a full description and a color."),
    ("Quick Add & Edit", "text-green", "Create or update cards from a popup form."),
    ("Expand & Copy", "text-purple", "Click a card for its full text and copy it in one tap."),
    ("Drag & Organize", "text-yellow", "The grid adapts to the screen; drag cards to reorder them."),
    ("Import / Export", "text-red", "Save the deck as a .json file and load it back anytime."),
];

#[component]
pub fn AboutModal() -> impl IntoView {
    let store = use_app_store();

    let is_open = move || store_read(&store, |deck| matches!(deck.selection().modal(), Modal::About));
    let close = move || store_mutate(&store, |deck| deck.close_modal());
    let add_samples = move |_| {
        let added = store_mutate(&store, |deck| deck.add_sample_cards());
        log::info!("sample pack added {} cards", added);
    };

    view! {
        <Show when=is_open>
            <ModalBackdrop on_close=move |_| close()>
                <div class="modal-content about-modal">
                    <div class="modal-header">
                        <h2>"About DeckNotes"</h2>
                        <button class="close-x" on:click=move |_| close()>"×"</button>
                    </div>

                    <p>
                        "DeckNotes keeps the abilities, conditions, feats and effects of your RPG \
                         character in view during play: a wall of colored notes, always within reach."
                    </p>
                    <p>"Made for side monitors, online games and quick lookups at the table."</p>

                    <section class="about-try">
                        <h3>"Try it out!"</h3>
                        <p>"Generate 20 sample D&D cards (spells, feats, conditions and items) to explore every feature."</p>
                        <button class="primary-btn" on:click=add_samples>
                            "🎲 Generate 20 D&D Sample Cards"
                        </button>
                    </section>

                    <section class="about-features">
                        <h3>"Features"</h3>
                        {FEATURES
                            .iter()
                            .map(|(name, class, text)| view! {
                                <div class="feature">
                                    <h4 class=*class>{*name}</h4>
                                    <p>{*text}</p>
                                </div>
                            })
                            .collect_view()}
                    </section>

                    <section class="about-feedback">
                        <h3>"Feedback"</h3>
                        <p>"Feedback and ideas are always welcome."</p>
                        <a class="primary-btn" href=FEEDBACK_URL target="_blank" rel="noopener noreferrer">
                            "Send Feedback"
                        </a>
                    </section>

                    <details class="about-diagnostics">
                        <summary>"Diagnostics"</summary>
                        <pre>{move || rolling_logger::recent_lines(DIAGNOSTIC_LINES).join("\n")}</pre>
                    </details>
                </div>
            </ModalBackdrop>
        </Show>
    }
}
