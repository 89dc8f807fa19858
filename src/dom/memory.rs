//! In-memory DOM backend.
//!
//! Handles are `Rc` clones of one shared node, so a component and a test can
//! both hold the same element and observe each other's writes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{Element, FormFields, Rect, Storage};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct Node {
    id: Option<String>,
    text: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    rect: Rect,
}

/// An element that lives only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(id: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().id = Some(id.to_owned());
        el
    }

    /// A nav-style anchor pointing at `href`.
    #[must_use]
    pub fn link(href: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().attributes.insert("href".into(), href.into());
        el
    }

    /// A section with `id` spanning `top..=bottom`.
    #[must_use]
    pub fn section(id: &str, top: f64, bottom: f64) -> Self {
        let el = Self::with_id(id);
        el.set_rect(Rect::new(top, bottom));
        el
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    /// Shift the element vertically, as scrolling the page by `dy` would.
    pub fn scroll_by(&self, dy: f64) {
        let mut node = self.0.borrow_mut();
        node.rect.top -= dy;
        node.rect.bottom -= dy;
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    /// Class tokens in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }
}

impl Element for MemoryElement {
    fn id(&self) -> Option<String> {
        self.0.borrow().id.clone().filter(|id| !id.is_empty())
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "id" {
            return node.id.clone();
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Dom("attribute name must not be empty".into()));
        }
        let mut node = self.0.borrow_mut();
        if name == "id" {
            node.id = Some(value.into());
        } else {
            node.attributes.insert(name.into(), value.into());
        }
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        validate_token(class)?;
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.into());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        validate_token(class)?;
        self.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        if self.has_class(class) {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }
}

/// Mirrors `DOMTokenList`, which throws on empty or whitespace-bearing tokens.
fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(Error::Dom(format!("invalid class token {token:?}")));
    }
    Ok(())
}

/// A form whose controls all reset to empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm(Rc<RefCell<BTreeMap<String, String>>>);

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with one control per `(name, value)` pair.
    #[must_use]
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        let form = Self::new();
        for (name, value) in fields {
            form.set_field(name, value);
        }
        form
    }

    pub fn set_field(&self, name: &str, value: &str) {
        self.0.borrow_mut().insert(name.into(), value.into());
    }
}

impl FormFields for MemoryForm {
    fn field_value(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }

    fn reset(&self) {
        for value in self.0.borrow_mut().values_mut() {
            value.clear();
        }
    }
}

/// A preference store shared between clones, standing in for `localStorage`
/// across simulated reloads.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every call, like `localStorage` in a locked-down frame.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(Error::StorageUnavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::StorageUnavailable);
        }
        self.items.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}
