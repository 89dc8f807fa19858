//! Mobile navigation toggle.
//!
//! Open/closed is not tracked separately: it is whether the nav list carries
//! the `open` class.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::NAV_OPEN_CLASS;
use crate::dom::Element;

#[derive(Debug, Clone)]
pub struct MobileNav<E> {
    nav_list: E,
}

impl<E: Element> MobileNav<E> {
    /// Build the toggle when both the menu control and the nav list exist.
    #[must_use]
    pub fn new(menu_toggle: Option<&E>, nav_list: Option<E>) -> Option<Self> {
        match (menu_toggle, nav_list) {
            (Some(_), Some(nav_list)) => Some(Self { nav_list }),
            _ => {
                log::debug!("menu toggle or nav list missing, mobile nav skipped");
                None
            }
        }
    }

    /// Menu control clicked: flip the list open or closed. Returns the new state.
    pub fn on_menu_click(&self) -> bool {
        match self.nav_list.toggle_class(NAV_OPEN_CLASS) {
            Ok(open) => open,
            Err(e) => {
                log::warn!("toggling nav failed: {e}");
                self.is_open()
            }
        }
    }

    /// A nav link was followed: close the list, whatever its state.
    pub fn on_link_click(&self) {
        if let Err(e) = self.nav_list.remove_class(NAV_OPEN_CLASS) {
            log::warn!("closing nav failed: {e}");
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.nav_list.has_class(NAV_OPEN_CLASS)
    }
}
