//! Active nav link highlighting while scrolling.
//!
//! A section is current when a horizontal line `offset` pixels below the
//! viewport top falls inside it. Sections are checked in document order and
//! the last match wins, so in a malformed layout where sections overlap the
//! line, the later one is highlighted. Gaps between sections highlight nothing,
//! and so does a matching section whose `id` attribute is empty.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use std::collections::HashMap;

use crate::consts::NAV_ACTIVE_CLASS;
use crate::dom::{Element, Rect};

/// The id of the section under the `offset` line, last match winning.
#[must_use]
pub fn current_section<I>(sections: I, offset: f64) -> Option<String>
where
    I: IntoIterator<Item = (String, Rect)>,
{
    sections
        .into_iter()
        .filter(|(_, rect)| rect.spans(offset))
        .last()
        .map(|(id, _)| id)
}

/// Section id a link points at: its `href` minus the leading character.
#[must_use]
pub fn link_target(href: &str) -> &str {
    let mut chars = href.chars();
    chars.next();
    chars.as_str()
}

pub struct ScrollSpy<E> {
    sections: Vec<E>,
    links: Vec<E>,
    link_by_id: HashMap<String, usize>,
    offset: f64,
}

impl<E: Element> ScrollSpy<E> {
    /// Track `sections` and highlight among `links`. Sections without an `id`
    /// attribute are dropped; an empty `id` is kept, like `section[id]` keeps it.
    #[must_use]
    pub fn new(sections: Vec<E>, links: Vec<E>, offset: f64) -> Self {
        let sections = sections.into_iter().filter(|s| s.attribute("id").is_some()).collect();
        let mut link_by_id = HashMap::new();
        for (i, link) in links.iter().enumerate() {
            if let Some(href) = link.attribute("href") {
                link_by_id.insert(link_target(&href).to_owned(), i);
            }
        }
        Self { sections, links, link_by_id, offset }
    }

    /// Id of the section currently under the offset line. `None` when no
    /// section matches or the last match has an empty id.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        current_section(
            self.sections
                .iter()
                .filter_map(|s| s.attribute("id").map(|id| (id, s.bounding_rect()))),
            self.offset,
        )
        .filter(|id| !id.is_empty())
    }

    /// Recompute the current section and move the highlight to its link.
    pub fn on_scroll(&self) -> Option<String> {
        let current = self.current();
        for link in &self.links {
            if let Err(e) = link.remove_class(NAV_ACTIVE_CLASS) {
                log::warn!("clearing active link failed: {e}");
            }
        }
        if let Some(link) = current
            .as_deref()
            .and_then(|id| self.link_by_id.get(id))
            .and_then(|&i| self.links.get(i))
        {
            if let Err(e) = link.add_class(NAV_ACTIVE_CLASS) {
                log::warn!("highlighting active link failed: {e}");
            }
        }
        current
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
