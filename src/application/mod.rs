//! Application layer - Commands, Results, and Handlers.
//!
//! This layer turns raw canvas payloads into records through the parser port
//! and runs the analysis engine on them.

pub mod handlers;

pub use handlers::canvas::{
    AnalysisDepth, AnalyzeFitCommand, AnalyzeFitError, AnalyzeFitHandler, AnalyzeFitResult,
    CanvasKind, CompareCompetitorsCommand, CompareCompetitorsError, CompareCompetitorsHandler,
    CompareCompetitorsResult, RubricScore, ValidateCanvasCommand, ValidateCanvasError,
    ValidateCanvasHandler, ValidateCanvasResult,
};
