use wasm_bindgen::{JsCast, JsValue};

use web_sys::DomException;

use pagereveal::{DomError, RevealError};

/// Converts a thrown JavaScript value into a `DomError`, keeping the exception's name when it
/// has one.
pub fn to_dom_error(value: JsValue) -> DomError {
    if let Some(dom_exception) = value.dyn_ref::<DomException>() {
        DomError::new(dom_exception.name(), dom_exception.message())
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        DomError::new(String::from(error.name()), String::from(error.message()))
    } else {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));

        DomError::new("Error", message)
    }
}

/// A JavaScript `Error` carrying the `Display` of `error`, for throwing across the boundary.
pub fn from_reveal_error(error: RevealError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}
