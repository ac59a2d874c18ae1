//! Change notifications published by a `Deck`.

use crate::codec::ImportReport;
use crate::domain::CardId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    Created(CardId),
    Updated(CardId),
    DeletePending(CardId),
    Deleted(CardId),
    Reordered { moved: CardId, target: CardId },
    Imported(ImportReport),
    SamplesAdded(usize),
    Exported { count: usize },
    /// The in-memory change stands but could not be written to storage
    PersistFailed(String),
}

impl DeckEvent {
    /// Message worth showing to the user, if any
    pub fn notice(&self) -> Option<String> {
        match self {
            DeckEvent::Imported(report) => Some(report.to_string()),
            DeckEvent::SamplesAdded(n) => Some(format!("Added {} sample D&D cards to test the app!", n)),
            DeckEvent::PersistFailed(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

/// Result of one `Deck::delete` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First click: the card is marked and waits for confirmation
    Pending,
    Deleted,
}

/// Handle returned by `Deck::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
