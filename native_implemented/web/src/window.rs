use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use web_sys::{AddEventListenerOptions, Document, Event, EventTarget};

use pagereveal::DomError;

use crate::js_value;

/// How `on_content_loaded` scheduled its callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLoaded {
    /// The document was still parsing; the callback waits for `DOMContentLoaded`.
    Deferred,
    /// Parsing had already finished, so the callback ran before returning.
    Immediate,
}

/// The global window's document
pub fn document() -> Result<Document, DomError> {
    let window =
        web_sys::window().ok_or_else(|| DomError::new("ReferenceError", "window is not defined"))?;

    window
        .document()
        .ok_or_else(|| DomError::new("ReferenceError", "window has no document"))
}

/// Calls `callback` once the document's markup has been parsed.
///
/// A wasm module is usually instantiated asynchronously, so `DOMContentLoaded` may already have
/// fired when this is called; `readyState` tells the two cases apart.
pub fn on_content_loaded<F>(document: &Document, callback: F) -> Result<ContentLoaded, DomError>
where
    F: FnOnce(Document) + 'static,
{
    if document.ready_state() != "loading" {
        callback(document.clone());

        return Ok(ContentLoaded::Immediate);
    }

    add_content_loaded_listener(document, callback)?;

    Ok(ContentLoaded::Deferred)
}

/// Registers `callback` for the next `DOMContentLoaded` event on `document`.
///
/// The listener is registered with `once`, so the browser removes it before the call and later
/// dispatches of the event never reach the consumed closure.
pub fn add_content_loaded_listener<F>(document: &Document, callback: F) -> Result<(), DomError>
where
    F: FnOnce(Document) + 'static,
{
    let event_document = document.clone();
    let event_listener = Closure::once_into_js(move |_event: Event| callback(event_document));

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let document_event_target: &EventTarget = document.as_ref();

    document_event_target
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            event_listener.unchecked_ref(),
            &options,
        )
        .map_err(js_value::to_dom_error)
}
