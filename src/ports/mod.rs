//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Record Construction
//!
//! - `CanvasParser` - Turns raw payloads into validated canvas records

mod canvas_parser;

pub use canvas_parser::{CanvasParseError, CanvasParser};
