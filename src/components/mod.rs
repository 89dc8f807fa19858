//! Page behavior components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is built from explicit element handles and never reaches
//! for the document itself. They share nothing but the page: none calls
//! another, and `app` is the only place they meet.

pub mod contact;
pub mod footer;
pub mod nav;
pub mod scroll_spy;
pub mod theme;
pub mod typing;
