//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of
//! the canvas domain.

mod errors;
mod rating;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use rating::Rating;
