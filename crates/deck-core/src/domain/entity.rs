//! Domain Layer - Core Entity Trait and Errors
//!
//! Every persisted record exposes a unique id; every fallible operation
//! returns a [`DomainResult`].

use std::fmt;

use thiserror::Error;

use super::card::{CardId, DraftField};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A draft is missing required text
    #[error("Please fill in all fields (missing {0})")]
    Validation(MissingFields),
    /// An import payload could not be accepted
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Card not found: {0}")]
    NotFound(CardId),
    /// Stored data could not be read back
    #[error("Error loading cards from storage: {0}")]
    PersistenceRead(String),
    /// Storage refused the write (quota, disabled storage, ...)
    #[error("Could not save cards: {0}")]
    PersistenceWrite(String),
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),
}

/// Why an import payload was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid file format: expected a JSON array of cards")]
    NotAnArray,
    #[error("Error importing cards: {0}")]
    Malformed(String),
}

/// Required draft fields that were blank after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<DraftField>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
