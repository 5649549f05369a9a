//! # Linkly card
//!
//! Renders the shareable summary card of a workout session: a centered
//! vertical layout painted in one of several visual styles, exported as a
//! 1080x1920 PNG, a scaled down preview, or handed to a share target.

#[cfg(feature = "cli")]
pub mod cli;
pub mod data;
pub mod decode;
pub mod error;
pub mod export;
pub mod image;
pub mod layer;
pub mod layout;
pub mod logs;
pub mod pipeline;
pub mod render;
pub mod style;
pub mod text;

pub use error::{Error, Result};
