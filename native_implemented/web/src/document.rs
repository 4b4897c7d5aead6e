//! `pagereveal::dom` over the real browser DOM.
use wasm_bindgen::JsCast;

use web_sys::HtmlElement;

use pagereveal::{Document, DomError, Element};

use crate::js_value;

#[derive(Debug, Clone)]
pub struct WebDocument(web_sys::Document);

impl From<web_sys::Document> for WebDocument {
    fn from(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}

#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        // Only `HTMLElement`s expose an inline `CSSStyleDeclaration` through web-sys
        let html_element: &HtmlElement = self.0.dyn_ref().ok_or_else(|| {
            DomError::new(
                "TypeError",
                format!("<{}> is not an HTML element", self.0.local_name()),
            )
        })?;

        html_element
            .style()
            .set_property(name, value)
            .map_err(js_value::to_dom_error)
    }

    fn first_descendant_by_tag(&self, tag: &str) -> Option<WebElement> {
        self.0.get_elements_by_tag_name(tag).item(0).map(WebElement)
    }

    fn add_class(&self, class: &str) -> Result<bool, DomError> {
        let class_list = self.0.class_list();
        let absent = !class_list.contains(class);

        class_list.add_1(class).map_err(js_value::to_dom_error)?;

        Ok(absent)
    }
}
