//! The slice of the DOM the reveal needs.
//!
//! Lookups return `Option` so that a missing element is an ordinary value rather than a
//! fault on the next property access. Mutations return the host's exception as a `DomError`.
use crate::error::DomError;

pub trait Document {
    type Element: Element;

    /// `Document.getElementById`: the first element in tree order whose id is `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

pub trait Element: Sized {
    /// `element.style.setProperty(name, value)`
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// `element.getElementsByTagName(tag)[0]`: the first descendant in tree order, excluding
    /// `self`, whose tag name matches `tag` ignoring ASCII case.
    fn first_descendant_by_tag(&self, tag: &str) -> Option<Self>;

    /// `element.classList.add(class)`.  Returns whether `class` was absent before the call;
    /// adding a class that is already present changes nothing.
    fn add_class(&self, class: &str) -> Result<bool, DomError>;
}
