//! Canvas Validator - Rule checks producing errors, warnings and suggestions.
//!
//! Content rules never produce error-level findings, so a document that
//! passed structural checks always validates. Errors only appear when the
//! record could not be constructed at all (see [`ValidationResult::invalid`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::canvas::{BusinessModel, ValueDocument};

/// Recommended minimum items per customer-profile category.
pub const RECOMMENDED_MIN_ITEMS: usize = 3;

/// Findings from validating one canvas.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from findings; valid iff there are no errors.
    pub fn from_findings(
        errors: Vec<String>,
        warnings: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }

    /// Result for a document that failed record construction.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::from_findings(vec![error.into()], Vec::new(), Vec::new())
    }

    pub fn has_findings(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty() || !self.suggestions.is_empty()
    }
}

/// Validates canvases against content rules.
pub struct CanvasValidator;

impl CanvasValidator {
    pub fn validate_value_document(doc: &ValueDocument) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        for (label, count) in [
            ("customer jobs", doc.jobs.len()),
            ("customer pains", doc.pains.len()),
            ("customer gains", doc.gains.len()),
        ] {
            if count < RECOMMENDED_MIN_ITEMS {
                warnings.push(format!("Consider adding more {label} (3-5 recommended)"));
            }
        }

        let categories: BTreeSet<_> = doc.jobs.iter().map(|j| j.category).collect();
        if categories.len() < 2 {
            suggestions.push(
                "Consider adding jobs of different types (functional, social, emotional)"
                    .to_string(),
            );
        }

        let unaddressed: Vec<String> = doc
            .pains
            .iter()
            .filter(|p| !doc.is_pain_relieved(p))
            .map(|p| p.description.to_lowercase())
            .collect();
        if !unaddressed.is_empty() {
            suggestions.push(format!(
                "Consider adding pain relievers for: {}",
                first_two(&unaddressed)
            ));
        }

        let uncreated: Vec<String> = doc
            .gains
            .iter()
            .filter(|g| !doc.is_gain_created(g))
            .map(|g| g.description.to_lowercase())
            .collect();
        if !uncreated.is_empty() {
            suggestions.push(format!(
                "Consider adding gain creators for: {}",
                first_two(&uncreated)
            ));
        }

        ValidationResult::from_findings(Vec::new(), warnings, suggestions)
    }

    pub fn validate_business_model(model: &BusinessModel) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        for proposition in &model.value_propositions {
            if !model.segments.iter().any(|s| proposition.targets(s)) {
                warnings.push(format!(
                    "Value proposition targets unknown segment: {}",
                    proposition.target_segment
                ));
            }
        }

        for segment in &model.segments {
            if !model.has_proposition_for(segment) {
                warnings.push(format!("Segment '{}' has no value proposition", segment.name));
            }
        }

        for segment in &model.segments {
            if !model.has_revenue_from(segment) {
                suggestions.push(format!(
                    "Consider adding revenue stream for segment: {}",
                    segment.name
                ));
            }
        }

        let missing = model.uncovered_phases();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
            suggestions.push(format!(
                "Consider adding channels for phases: {}",
                names.join(", ")
            ));
        }

        ValidationResult::from_findings(Vec::new(), warnings, suggestions)
    }
}

fn first_two(items: &[String]) -> String {
    items.iter().take(2).cloned().collect::<Vec<_>>().join(", ")
}
