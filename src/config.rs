//! Page configuration.
//!
//! Defaults match the shipped markup. A page can override any subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "typing_text": "Jane Doe", "ids": { "year": "copyright-year" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{SCROLL_OFFSET_PX, SUBMIT_DELAY_MS, THEME_STORAGE_KEY, TYPING_INTERVAL_MS, TYPING_TEXT};
use crate::error::Result;

/// Id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

/// Element ids and selectors the page markup provides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub typing_target: String,
    pub theme_toggle: String,
    pub menu_toggle: String,
    pub nav_list: String,
    pub year: String,
    pub contact_form: String,
    pub form_status: String,
    /// Selector for the sections tracked by the scroll spy.
    pub sections: String,
    /// Selector for the nav links highlighted by the scroll spy.
    pub nav_links: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            typing_target: "typing-text".into(),
            theme_toggle: "themeToggle".into(),
            menu_toggle: "menuToggle".into(),
            nav_list: "navList".into(),
            year: "year".into(),
            contact_form: "contactForm".into(),
            form_status: "formStatus".into(),
            sections: "section[id]".into(),
            nav_links: ".nav-list a".into(),
        }
    }
}

/// Everything tunable about the page behaviors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub typing_text: String,
    pub typing_interval_ms: u32,
    pub theme_storage_key: String,
    pub scroll_offset_px: f64,
    pub submit_delay_ms: u32,
    pub log_level: LogLevel,
    pub ids: ElementIds,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            typing_text: TYPING_TEXT.into(),
            typing_interval_ms: TYPING_INTERVAL_MS,
            theme_storage_key: THEME_STORAGE_KEY.into(),
            scroll_offset_px: SCROLL_OFFSET_PX,
            submit_delay_ms: SUBMIT_DELAY_MS,
            log_level: LogLevel::default(),
            ids: ElementIds::default(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] when `raw` is not valid JSON or a
    /// value has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the page configuration from an optional inline block.
    ///
    /// An absent or blank block yields the defaults; an invalid one is logged
    /// and also yields the defaults.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page configuration: {e}");
                Self::default()
            }
        }
    }
}
