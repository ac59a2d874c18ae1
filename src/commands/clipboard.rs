//! Clipboard
//!
//! Uses the async Clipboard API in secure contexts and falls back to an
//! off-screen textarea with `execCommand("copy")` elsewhere.

use deck_core::domain::{DomainError, DomainResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;

fn clipboard_error(value: JsValue) -> DomainError {
    DomainError::Clipboard(js_error_message(&value))
}

fn has_clipboard_api(window: &web_sys::Window) -> bool {
    window.is_secure_context()
        && js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or(false)
}

pub async fn copy_text(text: &str) -> DomainResult<()> {
    let window = web_sys::window().ok_or_else(|| DomainError::Clipboard("no window".to_string()))?;
    if has_clipboard_api(&window) {
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await.map_err(clipboard_error)?;
        return Ok(());
    }
    log::debug!("clipboard API unavailable, using textarea fallback");
    fallback_copy(&window, text)
}

fn fallback_copy(window: &web_sys::Window, text: &str) -> DomainResult<()> {
    let document = window
        .document()
        .ok_or_else(|| DomainError::Clipboard("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| DomainError::Clipboard("no body".to_string()))?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(clipboard_error)?
        .dyn_into()
        .map_err(|_| DomainError::Clipboard("textarea cast failed".to_string()))?;
    textarea.set_value(text);
    let style = textarea.style();
    for (name, value) in [("position", "fixed"), ("left", "-999999px"), ("top", "-999999px")] {
        style.set_property(name, value).map_err(clipboard_error)?;
    }

    body.append_child(&textarea).map_err(clipboard_error)?;
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or_else(|| DomainError::Clipboard("not an HTML document".to_string()))
        .and_then(|doc| doc.exec_command("copy").map_err(clipboard_error));

    body.remove_child(&textarea).map_err(clipboard_error)?;

    match copied? {
        true => Ok(()),
        false => Err(DomainError::Clipboard("copy command was rejected".to_string())),
    }
}
