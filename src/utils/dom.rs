//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlElement, HtmlInputElement, Window};

use crate::core::error::DomError;
use crate::models::SelectedFile;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Find the HTML element with the given id.
pub fn element_by_id(id: &str) -> Result<HtmlElement, DomError> {
    let document = window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtmlElement(id.to_string()))
}

// =============================================================================
// File Selection
// =============================================================================

/// Convert a browser `FileList` into selected files, keeping its order.
///
/// `None` (no list, e.g. the picker was cancelled) stays `None` so callers can
/// pass the result straight to `add_files`.
pub fn file_list_to_vec(list: Option<FileList>) -> Option<Vec<SelectedFile>> {
    let list = list?;
    Some(
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(SelectedFile::from)
            .collect(),
    )
}

/// Get the `<input>` element an event was dispatched on.
pub fn input_target(ev: &Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// Read the files from a file input's `change` event.
pub fn files_from_input(ev: &Event) -> Option<Vec<SelectedFile>> {
    file_list_to_vec(input_target(ev)?.files())
}

/// Read the files carried by a `drop` event.
pub fn files_from_drop(ev: &DragEvent) -> Option<Vec<SelectedFile>> {
    file_list_to_vec(ev.data_transfer()?.files())
}

/// Clear a file input so choosing the same file again fires `change`.
pub fn reset_file_input(ev: &Event) {
    if let Some(input) = input_target(ev) {
        input.set_value("");
    }
}
