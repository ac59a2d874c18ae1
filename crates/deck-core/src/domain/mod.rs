//! Domain Layer
//!
//! Cards, drafts, errors and the time source. No storage or browser
//! dependencies live here.

mod entity;
mod card;
mod clock;
mod samples;

pub use entity::{Entity, DomainError, DomainResult, FormatError, MissingFields};
pub use card::{Card, CardColor, CardDraft, CardId, DraftField, ValidDraft};
pub use clock::{Clock, ManualClock, SystemClock};
pub use samples::{default_cards, sample_pack};
