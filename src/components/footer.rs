//! Footer year stamp, written once at load.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::dom::Element;

pub struct FooterYear;

impl FooterYear {
    /// Write `year` into `el` if it exists. Returns whether anything was written.
    pub fn stamp<E: Element>(el: Option<&E>, year: u32) -> bool {
        let Some(el) = el else {
            log::debug!("year element missing, footer stamp skipped");
            return false;
        };
        el.set_text(&year.to_string());
        true
    }
}
