//! Error types for the domain layer.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during record construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' must contain between {min} and {max} items, got {actual}")]
    ItemCount {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::ItemCount { field, .. } => field,
        }
    }

    /// Creates an item count validation error.
    pub fn item_count(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::ItemCount {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidItemCount,

    // Canvas errors
    InvalidValueDocument,
    InvalidBusinessModel,
    InvalidCompetitors,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidItemCount => "INVALID_ITEM_COUNT",
            ErrorCode::InvalidValueDocument => "INVALID_VALUE_DOCUMENT",
            ErrorCode::InvalidBusinessModel => "INVALID_BUSINESS_MODEL",
            ErrorCode::InvalidCompetitors => "INVALID_COMPETITORS",
        };
        write!(f, "{}", s)
    }
}

impl From<&ValidationError> for ErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::ItemCount { .. } => ErrorCode::InvalidItemCount,
        }
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::from(&err), err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("description");
        assert_eq!(format!("{}", err), "Field 'description' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("importance", 1, 5, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'importance' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn validation_error_item_count_displays_correctly() {
        let err = ValidationError::item_count("customer_jobs", 1, 10, 0);
        assert_eq!(
            format!("{}", err),
            "Field 'customer_jobs' must contain between 1 and 10 items, got 0"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InvalidValueDocument, "missing jobs");
        assert_eq!(format!("{}", err), "[INVALID_VALUE_DOCUMENT] missing jobs");
    }

    #[test]
    fn domain_error_from_validation_error_keeps_code() {
        let err: DomainError = ValidationError::empty_field("name").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InvalidValueDocument, "too many")
            .with_detail("field", "customer_pains");

        assert_eq!(err.details.get("field"), Some(&"customer_pains".to_string()));
    }

    #[test]
    fn validation_error_names_its_field() {
        assert_eq!(ValidationError::item_count("channels", 1, 10, 0).field(), "channels");
        assert_eq!(ValidationError::empty_field("name").field(), "name");
    }
}
