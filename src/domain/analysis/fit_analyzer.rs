//! Fit Analyzer - Internal fit of a value document and its alignment with a
//! business model.
//!
//! Fit progresses in three stages:
//!
//! 1. Problem-solution fit: the value map addresses the customer profile.
//! 2. Market indicators: the canvas suggests real demand.
//! 3. Business-model fit: the business model can deliver the value.
//!
//! All scores are percentages in `[0, 100]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::gap_analyzer::covered_by_text;
use crate::domain::canvas::linking::texts_match;
use crate::domain::canvas::{BusinessModel, ValueDocument};

const MAX_PERCENT: f64 = 100.0;

/// Internal fit of a value document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScore {
    pub problem_solution_fit: f64,
    pub product_market_fit_indicators: f64,
    pub pain_coverage: f64,
    pub gain_coverage: f64,
    /// Unweighted mean of the four component scores.
    pub overall_fit: f64,
}

impl FitScore {
    pub fn from_components(
        problem_solution_fit: f64,
        product_market_fit_indicators: f64,
        pain_coverage: f64,
        gain_coverage: f64,
    ) -> Self {
        Self {
            problem_solution_fit,
            product_market_fit_indicators,
            pain_coverage,
            gain_coverage,
            overall_fit: (problem_solution_fit
                + product_market_fit_indicators
                + pain_coverage
                + gain_coverage)
                / 4.0,
        }
    }
}

/// Structural alignment between a value document and a business model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub fit_score: f64,
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
    pub recommendation: String,
}

/// Alignment, or the reason it could not be computed.
///
/// A business model that fails to construct is reported here rather than
/// failing the whole request, so value-document results stay usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlignmentOutcome {
    Analyzed(AlignmentResult),
    Error { error: String },
}

impl AlignmentOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        AlignmentOutcome::Error {
            error: message.into(),
        }
    }

    pub fn result(&self) -> Option<&AlignmentResult> {
        match self {
            AlignmentOutcome::Analyzed(result) => Some(result),
            AlignmentOutcome::Error { .. } => None,
        }
    }
}

/// Human-readable reading of fit scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitInterpretation {
    pub problem_solution_fit: String,
    pub product_market_indicators: String,
    pub coverage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model_fit: Option<String>,
}

/// Computes fit scores. Stateless.
pub struct FitAnalyzer;

impl FitAnalyzer {
    pub fn analyze_internal_fit(doc: &ValueDocument) -> FitScore {
        FitScore::from_components(
            Self::problem_solution_fit(doc),
            Self::market_indicators(doc),
            Self::pain_coverage(doc),
            Self::gain_coverage(doc),
        )
    }

    /// Weighted: jobs 25, pain coverage 20 + relief quality 15, gain
    /// coverage 20 + creation quality 10, core offerings 10.
    pub fn problem_solution_fit(doc: &ValueDocument) -> f64 {
        let mut score: f64 = 0.0;

        if !doc.jobs.is_empty() {
            let important = doc.jobs.iter().filter(|j| j.importance.is_high()).count();
            score += ratio(important, doc.jobs.len()) * 25.0;
        }

        if !doc.pains.is_empty() && !doc.pain_relievers.is_empty() {
            let texts = covered_by_text(
                doc.pains
                    .iter()
                    .map(|p| (p.description.as_str(), doc.is_pain_relieved(p))),
            );
            let covered = texts.values().filter(|c| **c).count();
            let strong = doc
                .pain_relievers
                .iter()
                .filter(|r| r.effectiveness.is_high())
                .count();
            score += ratio(covered, texts.len()) * 20.0;
            score += ratio(strong, doc.pain_relievers.len()) * 15.0;
        }

        if !doc.gains.is_empty() && !doc.gain_creators.is_empty() {
            let texts = covered_by_text(
                doc.gains
                    .iter()
                    .map(|g| (g.description.as_str(), doc.is_gain_created(g))),
            );
            let covered = texts.values().filter(|c| **c).count();
            let strong = doc
                .gain_creators
                .iter()
                .filter(|c| c.effectiveness.is_high())
                .count();
            score += ratio(covered, texts.len()) * 20.0;
            score += ratio(strong, doc.gain_creators.len()) * 10.0;
        }

        if !doc.offerings.is_empty() {
            let core = doc
                .offerings
                .iter()
                .filter(|o| o.importance.is_high())
                .count();
            score += ratio(core, doc.offerings.len()) * 10.0;
        }

        score.min(MAX_PERCENT)
    }

    /// Theoretical demand indicators. Real product-market fit needs market
    /// evidence; this only reads the canvas.
    pub fn market_indicators(doc: &ValueDocument) -> f64 {
        let mut score: f64 = 0.0;

        if !doc.pains.is_empty() && !doc.pain_relievers.is_empty() {
            let extreme = doc.pains.iter().filter(|p| p.intensity.is_high()).count();
            if extreme > 0 {
                let strong = doc
                    .pain_relievers
                    .iter()
                    .filter(|r| r.effectiveness.is_high())
                    .count();
                score += (ratio(strong, extreme) * 40.0).min(40.0);
            }
        }

        if !doc.gains.is_empty() && !doc.gain_creators.is_empty() {
            let table_stakes = doc
                .gains
                .iter()
                .filter(|g| g.category.is_table_stakes())
                .count();
            if table_stakes > 0 {
                let strong = doc
                    .gain_creators
                    .iter()
                    .filter(|c| c.effectiveness.is_high())
                    .count();
                score += (ratio(strong, table_stakes) * 30.0).min(30.0);
            }
        }

        if !doc.pains.is_empty() {
            let frequent = doc.pains.iter().filter(|p| p.frequency.is_frequent()).count();
            score += ratio(frequent, doc.pains.len()) * 20.0;
        }

        if !doc.competitors.is_empty() {
            score += 10.0;
        }

        score.min(MAX_PERCENT)
    }

    /// Percentage of pains with at least one reliever linked to them.
    pub fn pain_coverage(doc: &ValueDocument) -> f64 {
        if doc.pains.is_empty() || doc.pain_relievers.is_empty() {
            return 0.0;
        }
        let relieved = doc.pains.iter().filter(|p| doc.is_pain_relieved(p)).count();
        ratio(relieved, doc.pains.len()) * MAX_PERCENT
    }

    /// Percentage of gains with at least one creator linked to them.
    pub fn gain_coverage(doc: &ValueDocument) -> f64 {
        if doc.gains.is_empty() || doc.gain_creators.is_empty() {
            return 0.0;
        }
        let created = doc.gains.iter().filter(|g| doc.is_gain_created(g)).count();
        ratio(created, doc.gains.len()) * MAX_PERCENT
    }

    pub fn analyze_alignment(doc: &ValueDocument, model: &BusinessModel) -> AlignmentResult {
        let mut score: f64 = 0.0;
        let mut strengths = Vec::new();
        let mut issues = Vec::new();

        if model
            .segments
            .iter()
            .any(|s| texts_match(&doc.target_segment, &s.name))
        {
            score += 20.0;
            strengths.push("Target segment aligns with business model customer segments".to_string());
        } else {
            issues.push(format!(
                "Target segment '{}' not found in business model segments",
                doc.target_segment
            ));
        }

        let offerings: BTreeSet<String> =
            doc.offerings.iter().map(|o| o.name.to_lowercase()).collect();
        let propositions: Vec<String> = model
            .value_propositions
            .iter()
            .map(|vp| vp.description.to_lowercase())
            .collect();
        let reflected = offerings
            .iter()
            .filter(|name| propositions.iter().any(|vp| vp.contains(name.as_str())))
            .count();
        if reflected > 0 {
            score += (reflected as f64 * 10.0).min(20.0);
            strengths.push(format!(
                "{reflected} offerings reflected in business model value propositions"
            ));
        } else {
            issues.push("Offerings not reflected in business model value propositions".to_string());
        }

        let diverse_channels = model.channels.len() >= 2;
        let has_primary = model.channels.iter().any(|c| c.primary);
        match (diverse_channels, has_primary) {
            (true, true) => {
                score += 15.0;
                strengths.push("Business model has adequate channel coverage".to_string());
            }
            (true, false) => {
                score += 10.0;
                issues.push("Consider identifying primary channels".to_string());
            }
            (false, _) => issues.push("Business model needs more channel diversity".to_string()),
        }

        let resource_types: BTreeSet<_> = model.resources.iter().map(|r| r.resource_type).collect();
        if resource_types.len() >= 2 {
            score += 15.0;
            strengths.push("Diverse key resources support value delivery".to_string());
        } else {
            issues.push("Consider diversifying key resources".to_string());
        }

        if !model.activities.is_empty() {
            score += 15.0;
            strengths.push("Key activities defined for value delivery".to_string());
        } else {
            issues.push("Define key activities for value delivery".to_string());
        }

        if model.revenue_streams.is_empty() {
            issues.push("Define revenue streams to capture value".to_string());
        } else if model.revenue_streams.iter().any(|r| r.recurring) {
            score += 15.0;
            strengths.push("Revenue model includes recurring streams".to_string());
        } else {
            score += 10.0;
            issues.push("Consider adding recurring revenue streams".to_string());
        }

        let fit_score = score.min(MAX_PERCENT);
        AlignmentResult {
            fit_score,
            strengths,
            issues,
            recommendation: alignment_recommendation(fit_score).to_string(),
        }
    }

    pub fn interpret(fit: &FitScore, alignment: Option<&AlignmentResult>) -> FitInterpretation {
        let problem_solution_fit = match fit.problem_solution_fit {
            s if s >= 80.0 => "Strong - Your solution clearly addresses customer problems",
            s if s >= 60.0 => "Good - Solution addresses most problems, some gaps remain",
            s if s >= 40.0 => "Moderate - Significant alignment work needed",
            _ => "Weak - Reconsider problem-solution alignment",
        };

        let product_market_indicators = match fit.product_market_fit_indicators {
            s if s >= 70.0 => "Promising - Strong theoretical indicators for market fit",
            s if s >= 50.0 => "Encouraging - Good foundation, validate with customers",
            _ => "Early stage - More customer discovery needed",
        };

        let coverage = if fit.pain_coverage >= 80.0 && fit.gain_coverage >= 80.0 {
            "Comprehensive - Most customer needs are addressed"
        } else if fit.pain_coverage >= 60.0 || fit.gain_coverage >= 60.0 {
            "Partial - Some important needs may be unaddressed"
        } else {
            "Limited - Many customer needs not yet addressed"
        };

        let business_model_fit = alignment.map(|a| {
            match a.fit_score {
                s if s >= 80.0 => "Strong - Business model well-aligned with value proposition",
                s if s >= 60.0 => "Good - Minor alignment adjustments needed",
                s if s >= 40.0 => "Moderate - Business model needs refinement",
                _ => "Weak - Significant business model work needed",
            }
            .to_string()
        });

        FitInterpretation {
            problem_solution_fit: problem_solution_fit.to_string(),
            product_market_indicators: product_market_indicators.to_string(),
            coverage: coverage.to_string(),
            business_model_fit,
        }
    }
}

fn alignment_recommendation(score: f64) -> &'static str {
    if score >= 80.0 {
        "Strong alignment between value proposition and business model. Focus on execution and validation."
    } else if score >= 60.0 {
        "Good alignment with some gaps. Address alignment issues to strengthen the business model."
    } else if score >= 40.0 {
        "Moderate alignment. Review the connection between your value proposition and business model."
    } else {
        "Weak alignment. Significant work needed to connect value proposition and business model. Consider redesigning."
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
