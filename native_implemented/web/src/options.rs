use wasm_bindgen::prelude::*;

use pagereveal::RevealConfig;

/// ```javascript
/// const options = new RevealOptions();
/// options.tableId = "results";
/// options.markerClass = "slide-in";
/// reveal_with(options);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct RevealOptions {
    config: RevealConfig,
}

#[wasm_bindgen]
impl RevealOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RevealOptions {
        Default::default()
    }

    #[wasm_bindgen(getter = tableId)]
    pub fn table_id(&self) -> String {
        self.config.table_id.clone()
    }

    #[wasm_bindgen(setter = tableId)]
    pub fn set_table_id(&mut self, table_id: String) {
        self.config.table_id = table_id;
    }

    #[wasm_bindgen(getter = bodyTag)]
    pub fn body_tag(&self) -> String {
        self.config.body_tag.clone()
    }

    #[wasm_bindgen(setter = bodyTag)]
    pub fn set_body_tag(&mut self, body_tag: String) {
        self.config.body_tag = body_tag;
    }

    #[wasm_bindgen(getter = markerClass)]
    pub fn marker_class(&self) -> String {
        self.config.marker_class.clone()
    }

    #[wasm_bindgen(setter = markerClass)]
    pub fn set_marker_class(&mut self, marker_class: String) {
        self.config.marker_class = marker_class;
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.config.display.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_display(&mut self, display: String) {
        self.config.display = display;
    }
}

impl RevealOptions {
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }
}
