//! A small in-memory DOM for running the reveal without a browser.
//!
//! Elements are shared handles, so a test can keep a handle to the `tbody` it built and inspect
//! it after the reveal ran against the document.
use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::error::DomError;

#[derive(Debug)]
pub struct MemoryDocument {
    root: MemoryElement,
    body: MemoryElement,
}

impl MemoryDocument {
    /// An `<html>` element holding an empty `<body>`
    pub fn new() -> Self {
        let root = MemoryElement::new("html");
        let body = MemoryElement::new("body");
        root.append_child(&body);

        Self { root, body }
    }

    pub fn body(&self) -> &MemoryElement {
        &self.body
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.root
            .find_inclusive(&|node: &Node| node.id.as_deref() == Some(id))
    }
}

#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

#[derive(Debug)]
struct Node {
    tag: String,
    id: Option<String>,
    style: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<MemoryElement>,
    styleable: bool,
}

impl MemoryElement {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.into(),
            id: None,
            style: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            styleable: true,
        })))
    }

    pub fn with_id<S: Into<String>>(self, id: S) -> Self {
        self.0.borrow_mut().id = Some(id.into());
        self
    }

    pub fn with_style(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().put_style(name, value);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().put_class(class);
        self
    }

    /// Makes later `set_style_property` calls fail, like an element without a
    /// `CSSStyleDeclaration`.
    pub fn reject_style(&self) {
        self.0.borrow_mut().styleable = false;
    }

    pub fn append_child(&self, child: &MemoryElement) {
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .style
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn class_list(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Pre-order search of `self` and its descendants
    fn find_inclusive(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<MemoryElement> {
        if predicate(&*self.0.borrow()) {
            return Some(self.clone());
        }

        self.find_descendant(predicate)
    }

    fn find_descendant(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<MemoryElement> {
        self.0
            .borrow()
            .children
            .iter()
            .find_map(|child| child.find_inclusive(predicate))
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl Element for MemoryElement {
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        let mut node = self.0.borrow_mut();

        if !node.styleable {
            return Err(DomError::new(
                "TypeError",
                format!("<{}> has no style declaration", node.tag),
            ));
        }

        node.put_style(name, value);

        Ok(())
    }

    fn first_descendant_by_tag(&self, tag: &str) -> Option<MemoryElement> {
        self.find_descendant(&|node: &Node| node.tag.eq_ignore_ascii_case(tag))
    }

    fn add_class(&self, class: &str) -> Result<bool, DomError> {
        if class.is_empty() {
            return Err(DomError::new(
                "SyntaxError",
                "The token provided must not be empty.",
            ));
        }

        if class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(DomError::new(
                "InvalidCharacterError",
                format!("The token provided ('{}') contains whitespace.", class),
            ));
        }

        Ok(self.0.borrow_mut().put_class(class))
    }
}

impl Node {
    fn put_style(&mut self, name: &str, value: &str) {
        match self.style.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.style.push((name.to_string(), value.to_string())),
        }
    }

    fn put_class(&mut self, class: &str) -> bool {
        if self.classes.iter().any(|existing| existing == class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }
}
