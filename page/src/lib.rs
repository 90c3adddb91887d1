//! Headless model of the portfolio page: the navigation set, the active
//! selection semantics and the literal page copy. No framework types, so
//! everything here is testable without a browser.

pub mod content;
pub mod nav;

pub use content::*;
pub use nav::*;
