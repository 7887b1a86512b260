//! Canvas Adapters - Record construction and file loading.

mod file_loader;
mod json_parser;

pub use file_loader::{load_document, DocumentFormat, LoadError};
pub use json_parser::JsonCanvasParser;
