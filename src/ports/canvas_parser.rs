//! Canvas Parser Port - Record construction interface.
//!
//! This port defines the contract for turning raw, loosely-typed payloads
//! into canvas records. The analysis engine only ever sees records that
//! passed through a parser, so it never handles malformed input.

use serde_json::Value;
use thiserror::Error;

use crate::domain::canvas::{BusinessModel, CompetitorSummary, ValueDocument};
use crate::domain::foundation::ValidationError;

/// Port for building canvas records from raw payloads.
///
/// # Contract
///
/// Implementations must:
/// - Resolve every category field to its enum variant
/// - Range-check ratings and enforce the 1-10 items per collection rule
/// - Reject blank descriptive text
/// - Never return a partially built record
///
/// # Usage
///
/// ```rust,ignore
/// let parser: &dyn CanvasParser = &JsonCanvasParser::new();
///
/// let doc = parser.parse_value_document(&payload)?;
/// let quality = QualityScorer::score(&doc);
/// ```
pub trait CanvasParser: Send + Sync {
    /// Builds a value document.
    fn parse_value_document(&self, data: &Value) -> Result<ValueDocument, CanvasParseError>;

    /// Builds a business model.
    fn parse_business_model(&self, data: &Value) -> Result<BusinessModel, CanvasParseError>;

    /// Builds a list of competitor summaries.
    fn parse_competitors(&self, data: &Value) -> Result<Vec<CompetitorSummary>, CanvasParseError>;
}

/// Errors that can occur while constructing canvas records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasParseError {
    /// Payload shape does not match the record model (missing field, wrong
    /// type, unknown category tag, out-of-range rating).
    #[error("{reason}")]
    Malformed { reason: String },

    /// Payload deserialized but violates a structural rule.
    #[error(transparent)]
    Structure(#[from] ValidationError),
}

impl CanvasParseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CanvasParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
