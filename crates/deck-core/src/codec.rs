//! Import/Export Codec
//!
//! JSON encoding of the card collection, shared by local storage and the
//! export file, plus the merge-by-id rule used for imports.

use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde_json::Value;

use crate::domain::{Card, CardId, DomainError, DomainResult, FormatError};

pub const EXPORT_FILE_NAME: &str = "deck-notes.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";
/// `accept` attribute for the import file picker
pub const IMPORT_ACCEPT: &str = ".json,.txt";

const IMPORT_EXTENSIONS: &[&str] = &["json", "txt"];

/// A file ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Cards decoded from a JSON array
#[derive(Debug, Clone, Default)]
pub struct DecodedBatch {
    pub cards: Vec<Card>,
    /// Elements that were not card-shaped
    pub rejected: usize,
}

/// Result of merging an incoming batch into a collection
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub added: Vec<Card>,
    /// Incoming cards dropped because their id was already taken
    pub duplicates: usize,
}

/// Summary reported to the user after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Imported {} new cards", self.added)?;
        if self.rejected > 0 {
            write!(f, " ({} unreadable entries skipped)", self.rejected)?;
        }
        Ok(())
    }
}

/// Compact form written to storage
pub fn encode_compact(cards: &[Card]) -> DomainResult<String> {
    serde_json::to_string(cards).map_err(|e| DomainError::PersistenceWrite(e.to_string()))
}

/// Pretty form (two-space indent) used for the export file
pub fn encode_pretty(cards: &[Card]) -> DomainResult<String> {
    serde_json::to_string_pretty(cards).map_err(|e| DomainError::PersistenceWrite(e.to_string()))
}

pub fn export_file(cards: &[Card], file_name: &str) -> DomainResult<ExportFile> {
    Ok(ExportFile {
        file_name: file_name.to_string(),
        mime_type: EXPORT_MIME_TYPE,
        contents: encode_pretty(cards)?,
    })
}

/// Parse a JSON array of cards, skipping elements that are not card-shaped
pub fn decode_cards(raw: &str) -> Result<DecodedBatch, FormatError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| FormatError::Malformed(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(FormatError::NotAnArray);
    };

    let mut batch = DecodedBatch::default();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Card>(item) {
            Ok(card) => batch.cards.push(card),
            Err(e) => {
                warn!("skipping entry {}: {}", index, e);
                batch.rejected += 1;
            }
        }
    }
    Ok(batch)
}

/// Keep incoming cards whose id is not yet taken, in the order supplied.
/// The first occurrence wins when the batch itself repeats an id.
pub fn merge_new(existing: &[Card], incoming: Vec<Card>) -> MergeOutcome {
    let mut taken: HashSet<CardId> = existing.iter().map(|c| c.id).collect();
    let mut outcome = MergeOutcome::default();
    for card in incoming {
        if taken.insert(card.id) {
            outcome.added.push(card);
        } else {
            outcome.duplicates += 1;
        }
    }
    outcome
}

pub fn accepts_file_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| IMPORT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
