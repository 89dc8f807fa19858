//! Light/dark theme with a persisted preference.
//!
//! The theme lives in the root element's `data-theme` attribute. Every
//! [`ThemeController::set_theme`] call also writes it to storage, so the
//! attribute and the stored preference always agree afterwards. At startup a
//! stored `light`/`dark` wins; otherwise the platform color-scheme signal
//! decides, leaning light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{ARIA_PRESSED, DARK_THEME_ICON, LIGHT_THEME_ICON, THEME_ATTRIBUTE};
use crate::dom::{Element, Storage};
use crate::error::Error;

/// Visual variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// `Some` for exactly `"light"` or `"dark"`.
    #[must_use]
    pub fn parse_known(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme the platform color-scheme signal asks for.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_known(s).ok_or_else(|| Error::UnknownTheme(s.to_owned()))
    }
}

/// Owns the theme attribute, the toggle control and the stored preference.
#[derive(Debug, Clone)]
pub struct ThemeController<E, S> {
    root: E,
    toggle: Option<E>,
    storage: S,
    storage_key: String,
}

impl<E: Element, S: Storage> ThemeController<E, S> {
    #[must_use]
    pub fn new(root: E, toggle: Option<E>, storage: S, storage_key: impl Into<String>) -> Self {
        Self { root, toggle, storage, storage_key: storage_key.into() }
    }

    /// Apply `theme` to the document and the toggle, then persist it.
    ///
    /// The value is not validated; whatever string is given is written.
    pub fn set_theme(&self, theme: &str) {
        if let Err(e) = self.root.set_attribute(THEME_ATTRIBUTE, theme) {
            log::warn!("setting {THEME_ATTRIBUTE} failed: {e}");
        }
        if let Some(toggle) = &self.toggle {
            toggle.set_text(if theme == "light" { LIGHT_THEME_ICON } else { DARK_THEME_ICON });
            let pressed = if theme == "dark" { "true" } else { "false" };
            if let Err(e) = toggle.set_attribute(ARIA_PRESSED, pressed) {
                log::warn!("setting {ARIA_PRESSED} failed: {e}");
            }
        }
        if let Err(e) = self.storage.set_item(&self.storage_key, theme) {
            log::warn!("theme preference not saved: {e}");
        }
        log::debug!("theme set to {theme}");
    }

    /// The stored preference, if it names a known theme.
    #[must_use]
    pub fn saved(&self) -> Option<Theme> {
        match self.storage.get_item(&self.storage_key) {
            Ok(raw) => raw.as_deref().and_then(Theme::parse_known),
            Err(e) => {
                log::warn!("theme preference unreadable: {e}");
                None
            }
        }
    }

    /// Apply the startup theme: the saved preference, else the platform signal.
    pub fn init(&self, system_prefers_dark: bool) -> Theme {
        let theme = self.saved().unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        self.set_theme(theme.as_str());
        theme
    }

    /// Flip between light and dark. A missing or empty attribute counts as
    /// light and anything other than `light` flips to light.
    pub fn on_toggle_click(&self) -> Theme {
        let current = self.root.attribute(THEME_ATTRIBUTE);
        let current = current.as_deref().filter(|v| !v.is_empty()).unwrap_or("light");
        let next = if current == "light" { Theme::Dark } else { Theme::Light };
        self.set_theme(next.as_str());
        next
    }

    /// The theme the document currently shows; unrecognized values read as light.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.root
            .attribute(THEME_ATTRIBUTE)
            .as_deref()
            .and_then(Theme::parse_known)
            .unwrap_or_default()
    }
}
