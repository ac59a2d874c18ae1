//! DeckNotes core
//!
//! Card collection management, local persistence, import/export and the
//! transient selection state behind the DeckNotes UI. Nothing here touches
//! the browser: storage is reached through [`repository::KeyValueStore`]
//! and time through [`domain::Clock`].

pub mod domain;
pub mod repository;
pub mod codec;
pub mod config;
pub mod deck;

pub use config::DeckConfig;
pub use deck::{Deck, DeckEvent, DeleteOutcome, ListenerId};
pub use domain::{Card, CardColor, CardDraft, CardId, DomainError, DomainResult, DraftField};
