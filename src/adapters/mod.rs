//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `canvas` - serde-based record construction and canvas file loading

pub mod canvas;

pub use canvas::{load_document, DocumentFormat, JsonCanvasParser, LoadError};
