//! Browser Capabilities
//!
//! Adapters between `deck-core` and the browser: local storage, clipboard,
//! file download and file reading.

mod storage;
mod clipboard;
mod files;

use wasm_bindgen::{JsCast, JsValue};

pub use storage::BrowserStore;
pub use clipboard::copy_text;
pub use files::{download, read_file_text};

/// Best-effort message out of a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
