//! Crate-wide error type.
//!
//! Components never surface these to the page: DOM and storage failures are
//! logged and the affected behavior degrades. The variants exist so the
//! backends can say precisely what went wrong.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised by DOM backends, storage, configuration and setup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A DOM call threw a JavaScript exception.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The browser does not expose `localStorage` (privacy mode, sandboxed frame).
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// A `localStorage` read or write threw.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// A theme name other than `light` or `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// The email pattern failed to compile.
    #[error("invalid email pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
    /// The inline configuration block is not valid JSON for [`crate::PortfolioConfig`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// An element required by the page setup is not in the document.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
