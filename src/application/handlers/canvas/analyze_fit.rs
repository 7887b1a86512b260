//! AnalyzeFitHandler - Fit analysis for a value document.
//!
//! Computes internal fit and, when a business model is supplied, alignment
//! between the two. Detailed depth adds fit recommendations and a keyed
//! interpretation of the scores.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::rejected;
use crate::domain::analysis::{
    AlignmentOutcome, FitAnalyzer, FitInterpretation, FitScore, Recommendation,
    RecommendationEngine,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CanvasParser;

/// How much of the analysis to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    /// Scores only.
    Quick,
    /// Scores, recommendations and interpretation.
    #[default]
    Detailed,
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisDepth::Quick => write!(f, "quick"),
            AnalysisDepth::Detailed => write!(f, "detailed"),
        }
    }
}

/// Command to analyze fit.
#[derive(Debug, Clone)]
pub struct AnalyzeFitCommand {
    pub value_document: Value,
    pub business_model: Option<Value>,
    pub depth: AnalysisDepth,
}

/// Result of fit analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeFitResult {
    pub fit: FitScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentOutcome>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<FitInterpretation>,
}

/// Errors that can occur during fit analysis.
#[derive(Debug, Clone, Error)]
pub enum AnalyzeFitError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Handler for fit analysis.
pub struct AnalyzeFitHandler {
    parser: Arc<dyn CanvasParser>,
}

impl AnalyzeFitHandler {
    pub fn new(parser: Arc<dyn CanvasParser>) -> Self {
        Self { parser }
    }

    pub fn handle(&self, cmd: AnalyzeFitCommand) -> Result<AnalyzeFitResult, AnalyzeFitError> {
        debug!(
            depth = %cmd.depth,
            with_business_model = cmd.business_model.is_some(),
            "Analyzing fit"
        );

        let doc = self
            .parser
            .parse_value_document(&cmd.value_document)
            .map_err(|err| rejected(ErrorCode::InvalidValueDocument, &err))?;

        let fit = FitAnalyzer::analyze_internal_fit(&doc);

        // A bad business model degrades to an error marker; the fit score stands.
        let alignment = cmd.business_model.as_ref().map(|payload| {
            match self.parser.parse_business_model(payload) {
                Ok(model) => AlignmentOutcome::Analyzed(FitAnalyzer::analyze_alignment(&doc, &model)),
                Err(err) => {
                    warn!(error = %err, "Alignment skipped");
                    AlignmentOutcome::error(format!("Could not analyze alignment: {err}"))
                }
            }
        });
        let aligned = alignment.as_ref().and_then(AlignmentOutcome::result);

        let (recommendations, interpretation) = match cmd.depth {
            AnalysisDepth::Quick => (Vec::new(), None),
            AnalysisDepth::Detailed => (
                RecommendationEngine::for_fit(Some(&fit), aligned),
                Some(FitAnalyzer::interpret(&fit, aligned)),
            ),
        };

        info!(
            overall_fit = fit.overall_fit,
            alignment_score = ?aligned.map(|a| a.fit_score),
            recommendations = recommendations.len(),
            "Fit analyzed"
        );

        Ok(AnalyzeFitResult {
            fit,
            alignment,
            recommendations,
            interpretation,
        })
    }
}
