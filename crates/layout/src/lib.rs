//! Flow layout of a styled document tree onto PDF pages.
//!
//! The engine walks a [`Node`](simplepdf_idf::Node) tree depth-first, resolves each
//! element's [`TextStyle`](simplepdf_style::TextStyle) from its parent's, word-wraps text
//! against the page's right margin and starts a new page whenever a line would cross the
//! bottom margin. Output goes straight into a [`Document`](simplepdf_render::Document).

pub mod config;
mod engine;
mod error;
pub mod tags;

pub use config::LayoutConfig;
pub use engine::{Cursor, LayoutEngine};
pub use error::LayoutError;
