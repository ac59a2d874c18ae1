//! File Download / Upload
//!
//! Export goes through a Blob object URL and a temporary anchor; import
//! reads the picked file as text.

use deck_core::codec::ExportFile;
use deck_core::domain::{DomainError, DomainResult, FormatError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;

fn export_error(value: JsValue) -> DomainError {
    DomainError::PersistenceWrite(format!("export failed: {}", js_error_message(&value)))
}

/// Offer `file` as a browser download
pub fn download(file: &ExportFile) -> DomainResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DomainError::PersistenceWrite("export failed: no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| DomainError::PersistenceWrite("export failed: no body".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(export_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(export_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(export_error)?
        .dyn_into()
        .map_err(|_| DomainError::PersistenceWrite("export failed: anchor cast".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    body.append_child(&anchor).map_err(export_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(export_error)?;
    web_sys::Url::revoke_object_url(&url).map_err(export_error)?;
    Ok(())
}

/// Read a user-picked file as UTF-8 text
pub async fn read_file_text(file: web_sys::File) -> DomainResult<String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| FormatError::Malformed(js_error_message(&e)))?;
    value
        .as_string()
        .ok_or_else(|| FormatError::Malformed("file is not text".to_string()).into())
}
