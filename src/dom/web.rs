//! `web-sys` implementations of the DOM seams.
//!
//! JavaScript exceptions are carried as [`Error::Dom`] / [`Error::Storage`]
//! with the exception's debug rendering.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use super::{Element, FormFields, Rect, Storage};
use crate::error::{Error, Result};

pub(crate) fn dom_error(err: JsValue) -> Error {
    Error::Dom(format!("{err:?}"))
}

impl Element for web_sys::Element {
    fn id(&self) -> Option<String> {
        let id = web_sys::Element::id(self);
        if id.is_empty() { None } else { Some(id) }
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        web_sys::Element::set_attribute(self, name, value).map_err(dom_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.class_list().remove_1(class).map_err(dom_error)
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        self.class_list().toggle(class).map_err(dom_error)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::new(rect.top(), rect.bottom())
    }
}

impl FormFields for web_sys::HtmlFormElement {
    fn field_value(&self, name: &str) -> Option<String> {
        match web_sys::FormData::new_with_form(self) {
            Ok(data) => data.get(name).as_string(),
            Err(e) => {
                log::warn!("reading form data failed: {}", dom_error(e));
                None
            }
        }
    }

    fn reset(&self) {
        web_sys::HtmlFormElement::reset(self);
    }
}

/// `localStorage`, if the browser grants it.
#[derive(Clone)]
pub struct WebStorage(Option<web_sys::Storage>);

impl WebStorage {
    /// Open the window's `localStorage`. Access failures leave the store unavailable.
    #[must_use]
    pub fn local(window: &web_sys::Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(e) => {
                log::warn!("localStorage access denied: {}", dom_error(e));
                Self(None)
            }
        }
    }

    fn inner(&self) -> Result<&web_sys::Storage> {
        self.0.as_ref().ok_or(Error::StorageUnavailable)
    }
}

impl Storage for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.inner()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    }
}

/// Collect every element matching `selector` under `root`, in document order.
///
/// # Errors
///
/// Returns [`Error::Dom`] if `selector` is not a valid CSS selector.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Result<Vec<web_sys::Element>> {
    let nodes = root.query_selector_all(selector).map_err(dom_error)?;
    Ok(collect_elements(&nodes))
}

/// Like [`query_all`], scoped to the whole document.
///
/// # Errors
///
/// Returns [`Error::Dom`] if `selector` is not a valid CSS selector.
pub fn query_document(document: &web_sys::Document, selector: &str) -> Result<Vec<web_sys::Element>> {
    let nodes = document.query_selector_all(selector).map_err(dom_error)?;
    Ok(collect_elements(&nodes))
}

fn collect_elements(nodes: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
        .collect()
}
