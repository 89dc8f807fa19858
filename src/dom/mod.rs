//! DOM seams used by the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never look elements up themselves; they are handed values
//! implementing these traits. In the browser those are `web-sys` handles
//! ([`web`]), in tests and headless use they are [`memory`] handles. Both are
//! cheap to clone and share the underlying node, like DOM references.

pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use crate::error::Result;

/// Vertical extent of an element relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a horizontal line at `y` crosses this rect, edges included.
    #[must_use]
    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The subset of the DOM element API the page behaviors touch.
pub trait Element {
    /// The element id, or `None` when it has none (or an empty one).
    fn id(&self) -> Option<String>;

    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    /// Append `text` to the current text content.
    fn append_text(&self, text: &str) {
        let mut current = self.text();
        current.push_str(text);
        self.set_text(&current);
    }

    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] if the backend rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn has_class(&self, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] if the backend rejects the class token.
    fn add_class(&self, class: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] if the backend rejects the class token.
    fn remove_class(&self, class: &str) -> Result<()>;

    /// Flip `class` and report whether it is now present.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] if the backend rejects the class token.
    fn toggle_class(&self, class: &str) -> Result<bool>;

    fn bounding_rect(&self) -> Rect;
}

/// Read access to named form controls, plus reset.
pub trait FormFields {
    /// Current value of the control named `name`, if the form has one.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Restore every control to its initial value.
    fn reset(&self);
}

/// Durable string key-value store (`localStorage` in the browser).
pub trait Storage {
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageUnavailable`] or [`crate::Error::Storage`]
    /// when the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns [`crate::Error::StorageUnavailable`] or [`crate::Error::Storage`]
    /// when the store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
