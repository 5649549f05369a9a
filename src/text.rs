//! Font selection for card text.

pub mod font;

pub use font::FontCatalog;
