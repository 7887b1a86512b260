//! ValidateCanvasHandler - Validates and scores one canvas.
//!
//! A value document gets quality scoring, gap analysis and rubric plus fit
//! recommendations. A business model gets attractiveness scoring, gap
//! analysis and, when a value document is supplied, an alignment check.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::rejected;
use crate::domain::analysis::{
    AlignmentOutcome, AttractivenessScore, AttractivenessScorer, CanvasValidator, FitAnalyzer,
    GapAnalyzer, QualityScore, QualityScorer, Recommendation, RecommendationEngine, RubricScores,
    ValidationResult,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CanvasParser;

/// Which canvas a payload describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasKind {
    #[serde(alias = "vpc")]
    ValueDocument,
    #[serde(alias = "bmc")]
    BusinessModel,
}

impl fmt::Display for CanvasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasKind::ValueDocument => write!(f, "value_document"),
            CanvasKind::BusinessModel => write!(f, "business_model"),
        }
    }
}

/// Command to validate a canvas.
#[derive(Debug, Clone)]
pub struct ValidateCanvasCommand {
    pub kind: CanvasKind,
    pub canvas: Value,
    /// Value document to check a business model's alignment against.
    pub value_document: Option<Value>,
}

/// Rubric score for either canvas kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RubricScore {
    Quality(QualityScore),
    Attractiveness(AttractivenessScore),
}

/// Result of validating a canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateCanvasResult {
    pub canvas_type: CanvasKind,
    pub validation: ValidationResult,
    pub quality_score: Option<RubricScore>,
    pub gap_analysis: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentOutcome>,
}

impl ValidateCanvasResult {
    /// Result for a canvas that could not be built: invalid, nothing scored.
    fn rejected(kind: CanvasKind, error: DomainError) -> Self {
        Self {
            canvas_type: kind,
            validation: ValidationResult::invalid(error.message),
            quality_score: None,
            gap_analysis: Vec::new(),
            recommendations: Vec::new(),
            alignment: None,
        }
    }
}

/// Errors that can occur during validation.
///
/// An unparseable canvas is not an error: it is reported as an invalid
/// [`ValidationResult`].
#[derive(Debug, Clone, Error)]
pub enum ValidateCanvasError {
    #[error("Alignment can only be checked when validating a business model")]
    AlignmentNotApplicable,
}

/// Handler for validating canvases.
pub struct ValidateCanvasHandler {
    parser: Arc<dyn CanvasParser>,
}

impl ValidateCanvasHandler {
    pub fn new(parser: Arc<dyn CanvasParser>) -> Self {
        Self { parser }
    }

    pub fn handle(
        &self,
        cmd: ValidateCanvasCommand,
    ) -> Result<ValidateCanvasResult, ValidateCanvasError> {
        debug!(canvas_type = %cmd.kind, "Validating canvas");

        let result = match cmd.kind {
            CanvasKind::ValueDocument => {
                if cmd.value_document.is_some() {
                    return Err(ValidateCanvasError::AlignmentNotApplicable);
                }
                self.validate_value_document(&cmd.canvas)
            }
            CanvasKind::BusinessModel => {
                self.validate_business_model(&cmd.canvas, cmd.value_document.as_ref())
            }
        };

        info!(
            canvas_type = %result.canvas_type,
            is_valid = result.validation.is_valid,
            warnings = result.validation.warnings.len(),
            gaps = result.gap_analysis.len(),
            recommendations = result.recommendations.len(),
            "Canvas validated"
        );

        Ok(result)
    }

    fn validate_value_document(&self, canvas: &Value) -> ValidateCanvasResult {
        let doc = match self.parser.parse_value_document(canvas) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(error = %err, "Value document rejected");
                return ValidateCanvasResult::rejected(
                    CanvasKind::ValueDocument,
                    rejected(ErrorCode::InvalidValueDocument, &err),
                );
            }
        };

        let quality = QualityScorer::score(&doc);
        let fit = FitAnalyzer::analyze_internal_fit(&doc);
        debug!(score = quality.total, percentage = quality.percentage, "Quality scored");

        ValidateCanvasResult {
            canvas_type: CanvasKind::ValueDocument,
            validation: CanvasValidator::validate_value_document(&doc),
            recommendations: RecommendationEngine::recommend(
                Some(RubricScores::Quality(&quality)),
                Some(&fit),
                None,
            ),
            gap_analysis: GapAnalyzer::value_document_gaps(&doc),
            quality_score: Some(RubricScore::Quality(quality)),
            alignment: None,
        }
    }

    fn validate_business_model(
        &self,
        canvas: &Value,
        value_document: Option<&Value>,
    ) -> ValidateCanvasResult {
        let model = match self.parser.parse_business_model(canvas) {
            Ok(model) => model,
            Err(err) => {
                warn!(error = %err, "Business model rejected");
                return ValidateCanvasResult::rejected(
                    CanvasKind::BusinessModel,
                    rejected(ErrorCode::InvalidBusinessModel, &err),
                );
            }
        };

        let attractiveness = AttractivenessScorer::score(&model);
        debug!(score = attractiveness.total, "Attractiveness scored");

        let alignment = value_document.map(|payload| match self.parser.parse_value_document(payload) {
            Ok(doc) => AlignmentOutcome::Analyzed(FitAnalyzer::analyze_alignment(&doc, &model)),
            Err(err) => {
                warn!(error = %err, "Alignment skipped");
                AlignmentOutcome::error(format!("Could not analyze alignment: {err}"))
            }
        });

        ValidateCanvasResult {
            canvas_type: CanvasKind::BusinessModel,
            validation: CanvasValidator::validate_business_model(&model),
            recommendations: RecommendationEngine::recommend(
                Some(RubricScores::Attractiveness(&attractiveness)),
                None,
                alignment.as_ref().and_then(AlignmentOutcome::result),
            ),
            gap_analysis: GapAnalyzer::business_model_gaps(&model),
            quality_score: Some(RubricScore::Attractiveness(attractiveness)),
            alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonCanvasParser;
    use crate::application::handlers::canvas::test_payloads::{model_payload, value_payload};
    use serde_json::json;

    fn handler() -> ValidateCanvasHandler {
        ValidateCanvasHandler::new(Arc::new(JsonCanvasParser::new()))
    }

    fn command(kind: CanvasKind, canvas: Value) -> ValidateCanvasCommand {
        ValidateCanvasCommand {
            kind,
            canvas,
            value_document: None,
        }
    }

    #[test]
    fn validates_and_scores_value_document() {
        let result = handler()
            .handle(command(CanvasKind::ValueDocument, value_payload()))
            .unwrap();

        assert!(result.validation.is_valid);
        assert!(result.gap_analysis.is_empty());
        match result.quality_score {
            Some(RubricScore::Quality(score)) => assert_eq!(score.percentage, 87.7),
            other => panic!("expected quality score, got {:?}", other),
        }
        assert_eq!(result.recommendations.len(), 2);
        assert!(result.alignment.is_none());
    }

    #[test]
    fn invalid_value_document_is_reported_not_raised() {
        let result = handler()
            .handle(command(CanvasKind::ValueDocument, json!({"company_name": "TestCo"})))
            .unwrap();

        assert!(!result.validation.is_valid);
        assert_eq!(result.validation.errors.len(), 1);
        assert!(result.validation.errors[0].starts_with("Invalid value document data: "));
        assert!(result.quality_score.is_none());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn invalid_business_model_is_reported_not_raised() {
        let mut payload = model_payload();
        payload["channels"] = json!([]);

        let result = handler()
            .handle(command(CanvasKind::BusinessModel, payload))
            .unwrap();

        assert!(!result.validation.is_valid);
        assert!(result.validation.errors[0].starts_with("Invalid business model data: "));
    }

    #[test]
    fn business_model_with_alignment() {
        let result = handler()
            .handle(ValidateCanvasCommand {
                kind: CanvasKind::BusinessModel,
                canvas: model_payload(),
                value_document: Some(value_payload()),
            })
            .unwrap();

        assert!(result.validation.is_valid);
        assert_eq!(
            result.gap_analysis,
            vec!["Missing channel phases: delivery, after_sales"]
        );
        let alignment = result.alignment.as_ref().and_then(AlignmentOutcome::result).unwrap();
        assert_eq!(alignment.fit_score, 80.0);
        // Lowest three dimensions, no alignment recommendations at 80.
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn bad_value_document_yields_alignment_error_marker() {
        let result = handler()
            .handle(ValidateCanvasCommand {
                kind: CanvasKind::BusinessModel,
                canvas: model_payload(),
                value_document: Some(json!({"jobs": "not a list"})),
            })
            .unwrap();

        assert!(result.quality_score.is_some());
        match result.alignment {
            Some(AlignmentOutcome::Error { error }) => {
                assert!(error.starts_with("Could not analyze alignment: "))
            }
            other => panic!("expected alignment error, got {:?}", other),
        }
    }

    #[test]
    fn alignment_rejected_for_value_document_validation() {
        let err = handler()
            .handle(ValidateCanvasCommand {
                kind: CanvasKind::ValueDocument,
                canvas: value_payload(),
                value_document: Some(value_payload()),
            })
            .unwrap_err();
        assert!(matches!(err, ValidateCanvasError::AlignmentNotApplicable));
    }

    #[test]
    fn result_serializes_with_stable_keys() {
        let result = handler()
            .handle(command(CanvasKind::BusinessModel, model_payload()))
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["canvas_type"], "business_model");
        assert_eq!(json["quality_score"]["max"], 35.0);
        assert_eq!(json["quality_score"]["switching_costs"], 2.5);
        assert!(json.get("alignment").is_none());
        assert_eq!(json["recommendations"][0]["priority"], 3);
    }

    #[test]
    fn kind_accepts_short_aliases() {
        let kind: CanvasKind = serde_json::from_value(json!("bmc")).unwrap();
        assert_eq!(kind, CanvasKind::BusinessModel);
    }
}
