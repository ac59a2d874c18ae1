//! Deck configuration.

use crate::codec::EXPORT_FILE_NAME;
use crate::repository::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Local storage key holding the card array
    pub storage_key: String,
    /// Name offered for the exported file
    pub export_file_name: String,
    /// Fill an empty or unreadable store with the example deck
    pub seed_defaults: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            seed_defaults: true,
        }
    }
}

impl DeckConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    pub fn without_defaults(mut self) -> Self {
        self.seed_defaults = false;
        self
    }
}
