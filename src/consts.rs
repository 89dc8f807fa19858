//! Default constants and user-visible strings.

// ── Typing animation ────────────────────────────────────────────

/// Title revealed by the typing animation.
pub const TYPING_TEXT: &str = "M. Logeshwari";

/// Delay between revealed characters, in milliseconds.
pub const TYPING_INTERVAL_MS: u32 = 100;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "logeshwari-theme";

/// Attribute on the root element that carries the theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Toggle glyph while the light theme is active.
pub const LIGHT_THEME_ICON: &str = "🌙";

/// Toggle glyph while any other theme is active.
pub const DARK_THEME_ICON: &str = "☀️";

/// Pressed-state attribute on the theme toggle.
pub const ARIA_PRESSED: &str = "aria-pressed";

/// Media query for the platform color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Navigation ──────────────────────────────────────────────────

/// Class marking the mobile nav list as expanded.
pub const NAV_OPEN_CLASS: &str = "open";

/// Class marking the nav link of the visible section.
pub const NAV_ACTIVE_CLASS: &str = "active";

/// Distance from the viewport top of the line that selects the current section, in CSS pixels.
pub const SCROLL_OFFSET_PX: f64 = 120.0;

// ── Contact form ────────────────────────────────────────────────

/// Simulated round-trip delay before the thank-you message, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 600;

/// Regex class of one non-space character, where space means the JavaScript
/// whitespace set: ASCII whitespace, NBSP, U+1680, U+2000..=U+200A, line and
/// paragraph separators, U+202F, U+205F, U+3000 and the BOM.
pub const NON_SPACE_CLASS: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

pub const STATUS_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const STATUS_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const STATUS_SENDING: &str = "Sending…";
pub const STATUS_SENT: &str = "Thank you! Your message has been sent (demo).";
