//! Shows the page's `search_list` table and fades its body in once the markup is parsed.
//!
//! Loading the module is enough: `start` waits for the document to finish parsing and then runs
//! a one-shot [`PageRevealController`] against it. `reveal`, `reveal_with` and `set_log_level`
//! are exported for pages that want to drive it themselves.
pub mod document;
pub mod js_value;
pub mod logging;
pub mod options;
mod start;
pub mod window;

use log::{error, info};

use wasm_bindgen::prelude::*;

use pagereveal::{PageRevealController, RevealConfig, RevealError};

use crate::document::WebDocument;
use crate::options::RevealOptions;
use crate::start::*;
use crate::window::ContentLoaded;

#[wasm_bindgen(start)]
pub fn start() {
    set_panic_hook();
    init_logger();

    if let Err(error) = install(RevealConfig::default()) {
        error!("{}", error);
    }
}

/// Runs the one-shot reveal for `config` when the current document finishes parsing
pub fn install(config: RevealConfig) -> Result<ContentLoaded, RevealError> {
    let document = window::document()?;
    let table_id = config.table_id.clone();
    let controller = PageRevealController::new(config);

    let content_loaded = window::on_content_loaded(&document, move |document| {
        // Nothing on the page can act on a failure, so the console is where it ends up
        if let Err(error) = controller.trigger(&WebDocument::from(document)) {
            error!("{}", error);
        }
    })?;
    info!("reveal of #{} {:?}", table_id, content_loaded);

    Ok(content_loaded)
}

/// Shows the `search_list` table and marks its body now, throwing if either is missing
#[wasm_bindgen]
pub fn reveal() -> Result<(), JsValue> {
    reveal_config(&RevealConfig::default())
}

/// `reveal` with the names in `options`
#[wasm_bindgen]
pub fn reveal_with(options: &RevealOptions) -> Result<(), JsValue> {
    reveal_config(options.config())
}

/// Changes how much the module writes to the console
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level_filter = logging::parse_level(level).ok_or_else(|| {
        JsValue::from(js_sys::Error::new(&format!("unknown log level {:?}", level)))
    })?;

    log::set_max_level(level_filter);

    Ok(())
}

fn reveal_config(config: &RevealConfig) -> Result<(), JsValue> {
    let document = window::document()
        .map_err(RevealError::from)
        .map_err(js_value::from_reveal_error)?;

    pagereveal::reveal(&WebDocument::from(document), config)
        .map(|_| ())
        .map_err(js_value::from_reveal_error)
}
