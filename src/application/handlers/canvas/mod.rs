//! Canvas command handlers.
//!
//! Each handler takes raw payloads, builds records through the parser port,
//! runs the analysis engine and assembles a keyed result. Handlers are
//! synchronous: the engine does no I/O.

mod analyze_fit;
mod compare_competitors;
mod validate_canvas;

pub use analyze_fit::{
    AnalysisDepth, AnalyzeFitCommand, AnalyzeFitError, AnalyzeFitHandler, AnalyzeFitResult,
};
pub use compare_competitors::{
    CompareCompetitorsCommand, CompareCompetitorsError, CompareCompetitorsHandler,
    CompareCompetitorsResult,
};
pub use validate_canvas::{
    CanvasKind, RubricScore, ValidateCanvasCommand, ValidateCanvasError, ValidateCanvasHandler,
    ValidateCanvasResult,
};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CanvasParseError;

/// Display label used in rejection messages.
fn label(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidBusinessModel => "business model",
        ErrorCode::InvalidCompetitors => "competitor",
        _ => "value document",
    }
}

/// Wraps a parse failure as "Invalid <document> data: <reason>".
///
/// Structural failures also carry the offending field under `field`.
fn rejected(code: ErrorCode, err: &CanvasParseError) -> DomainError {
    let error = DomainError::new(code, format!("Invalid {} data: {}", label(code), err));
    match err {
        CanvasParseError::Structure(validation) => error.with_detail("field", validation.field()),
        CanvasParseError::Malformed { .. } => error,
    }
}
