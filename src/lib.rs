//! Client-side behaviors for the portfolio page.
//!
//! This crate is compiled to WebAssembly and attached to a static HTML page.
//! Each behavior is a small component built from explicit element handles, so
//! the same logic runs against the browser DOM (`hydrate` feature) and against
//! the in-memory DOM used by the tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | Typing animator, theme, mobile nav, scroll spy, footer year, contact form |
//! | [`dom`] | Element, form and storage traits plus in-memory and `web-sys` backends |
//! | [`schedule`] | Timer abstraction with a virtual-clock scheduler for tests |
//! | [`config`] | Page configuration, overridable from an inline JSON block |
//! | [`consts`] | Default constants and user-visible strings |
//! | [`error`] | Crate-wide error type |
//! | `app` | Browser entry point that wires everything up (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod schedule;

pub use config::PortfolioConfig;
pub use error::{Error, Result};
