//! Recommendation Engine - Prioritized improvement actions.
//!
//! Rubric recommendations come from the three lowest-scoring criteria or
//! dimensions below 4.0. Every criterion and dimension maps to a template,
//! so nothing is silently skipped. Fit recommendations fire on fixed
//! thresholds with fixed priorities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attractiveness_scorer::{AttractivenessDimension, AttractivenessScore};
use super::fit_analyzer::{AlignmentResult, FitScore};
use super::quality_scorer::{QualityCriterion, QualityScore};
use crate::domain::foundation::ValidationError;

/// Scores at or above this value need no recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 4.0;

/// Maximum rubric recommendations per evaluation.
pub const MAX_RUBRIC_RECOMMENDATIONS: usize = 3;

/// Maximum alignment issues echoed as recommendations.
pub const MAX_ISSUE_RECOMMENDATIONS: usize = 2;

const PROBLEM_SOLUTION_MIN: f64 = 60.0;
const COVERAGE_MIN: f64 = 70.0;
const ALIGNMENT_MIN: f64 = 60.0;

/// Recommendation priority, serialized as 1 (high) to 3 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RecommendationPriority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl RecommendationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationPriority::High => "High",
            RecommendationPriority::Medium => "Medium",
            RecommendationPriority::Low => "Low",
        }
    }
}

impl From<RecommendationPriority> for u8 {
    fn from(priority: RecommendationPriority) -> Self {
        priority as u8
    }
}

impl TryFrom<u8> for RecommendationPriority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RecommendationPriority::High),
            2 => Ok(RecommendationPriority::Medium),
            3 => Ok(RecommendationPriority::Low),
            other => Err(ValidationError::out_of_range("priority", 1, 3, other as i32)),
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A human-actionable improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub category: String,
    pub description: String,
    pub rationale: String,
}

impl Recommendation {
    pub fn new(
        priority: RecommendationPriority,
        category: impl Into<String>,
        description: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            category: category.into(),
            description: description.into(),
            rationale: rationale.into(),
        }
    }
}

/// Rubric output a recommendation pass can start from.
#[derive(Debug, Clone, Copy)]
pub enum RubricScores<'a> {
    Quality(&'a QualityScore),
    Attractiveness(&'a AttractivenessScore),
}

/// Derives recommendations from scores. Stateless.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Rubric recommendations first, then fit and alignment.
    pub fn recommend(
        rubric: Option<RubricScores<'_>>,
        fit: Option<&FitScore>,
        alignment: Option<&AlignmentResult>,
    ) -> Vec<Recommendation> {
        let mut recommendations = match rubric {
            Some(scores) => Self::for_rubric(scores),
            None => Vec::new(),
        };
        recommendations.extend(Self::for_fit(fit, alignment));
        recommendations
    }

    pub fn for_rubric(scores: RubricScores<'_>) -> Vec<Recommendation> {
        match scores {
            RubricScores::Quality(score) => lowest(
                QualityCriterion::all().iter().map(|&c| (c, score.score(c))),
            )
            .into_iter()
            .map(criterion_template)
            .collect(),
            RubricScores::Attractiveness(score) => lowest(score.dimensions().into_iter())
                .into_iter()
                .map(dimension_template)
                .collect(),
        }
    }

    pub fn for_fit(fit: Option<&FitScore>, alignment: Option<&AlignmentResult>) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if let Some(fit) = fit {
            if fit.problem_solution_fit < PROBLEM_SOLUTION_MIN {
                recommendations.push(Recommendation::new(
                    RecommendationPriority::High,
                    "Problem-Solution Fit",
                    "Strengthen the connection between customer pains and pain relievers",
                    "Low problem-solution fit indicates your solution may not address real problems",
                ));
            }
            if fit.pain_coverage < COVERAGE_MIN {
                recommendations.push(Recommendation::new(
                    RecommendationPriority::Medium,
                    "Pain Coverage",
                    "Add pain relievers to address uncovered customer pains",
                    format!("Only {:.0}% of pains are addressed", fit.pain_coverage),
                ));
            }
            if fit.gain_coverage < COVERAGE_MIN {
                recommendations.push(Recommendation::new(
                    RecommendationPriority::Medium,
                    "Gain Coverage",
                    "Add gain creators to address uncovered customer gains",
                    format!("Only {:.0}% of gains are created", fit.gain_coverage),
                ));
            }
        }

        if let Some(alignment) = alignment {
            if alignment.fit_score < ALIGNMENT_MIN {
                recommendations.push(Recommendation::new(
                    RecommendationPriority::High,
                    "Business Model Fit",
                    "Align your business model with your value proposition",
                    "Low fit score indicates disconnect between value proposition and business model",
                ));
                for issue in alignment.issues.iter().take(MAX_ISSUE_RECOMMENDATIONS) {
                    recommendations.push(Recommendation::new(
                        RecommendationPriority::Medium,
                        "Alignment",
                        format!("Address: {issue}"),
                        "Identified misalignment between value proposition and business model",
                    ));
                }
            }
        }

        recommendations
    }
}

/// Up to three keys with the lowest scores below the threshold. Ties keep
/// canonical order.
fn lowest<K>(scores: impl Iterator<Item = (K, f64)>) -> Vec<K> {
    let mut scores: Vec<(K, f64)> = scores.collect();
    scores.sort_by(|a, b| a.1.total_cmp(&b.1));
    scores
        .into_iter()
        .take(MAX_RUBRIC_RECOMMENDATIONS)
        .filter(|(_, score)| *score < RECOMMENDATION_THRESHOLD)
        .map(|(key, _)| key)
        .collect()
}

fn criterion_template(criterion: QualityCriterion) -> Recommendation {
    use RecommendationPriority::{High, Medium};

    let (priority, category, description, rationale) = match criterion {
        QualityCriterion::EmbeddedInBusinessModel => (
            High,
            "Business Model",
            "Ensure your value proposition is connected to a comprehensive business model",
            "A great value proposition needs a great business model to deliver it",
        ),
        QualityCriterion::FocusOnMostImportant => (
            High,
            "Customer Focus",
            "Prioritize the most important customer jobs",
            "Focus resources on what matters most to customers",
        ),
        QualityCriterion::FocusOnUnsatisfied => (
            High,
            "Pain Relief",
            "Target intense pains that current solutions leave unresolved",
            "Unsatisfied needs are where customers notice a difference",
        ),
        QualityCriterion::ConvergeOnFewThings => (
            Medium,
            "Focus",
            "Concentrate on a few core offerings that do the job extremely well",
            "Trying to address everything dilutes the value proposition",
        ),
        QualityCriterion::AddressAllJobTypes => (
            Medium,
            "Job Coverage",
            "Address functional, social, and emotional jobs",
            "Customers have multiple types of jobs beyond just functional tasks",
        ),
        QualityCriterion::AlignWithSuccessMetrics => (
            High,
            "Alignment",
            "Link every pain reliever to a specific customer pain",
            "Relievers that match no pain do not move how customers measure success",
        ),
        QualityCriterion::FocusOnHighImpact => (
            Medium,
            "Impact",
            "Focus on jobs, pains and gains customers rate as highly important",
            "High-impact items drive adoption more than marginal ones",
        ),
        QualityCriterion::DifferentiateFromCompetition => (
            High,
            "Differentiation",
            "Analyze competitors and identify unique positioning",
            "Clear differentiation is essential for market success",
        ),
        QualityCriterion::OutperformCompetition => (
            Medium,
            "Performance",
            "Strengthen the effectiveness of pain relievers and gain creators",
            "Customers switch when a solution clearly outperforms alternatives",
        ),
        QualityCriterion::DifficultToCopy => (
            Medium,
            "Defensibility",
            "Build in elements that are difficult for competitors to copy",
            "Sustainable advantage requires defensibility",
        ),
    };
    Recommendation::new(priority, category, description, rationale)
}

fn dimension_template(dimension: AttractivenessDimension) -> Recommendation {
    use RecommendationPriority::{High, Low, Medium};

    let (priority, category, description, rationale) = match dimension {
        AttractivenessDimension::SwitchingCosts => (
            Medium,
            "Retention",
            "Increase switching costs through deeper integrations or relationships",
            "Higher switching costs improve customer retention",
        ),
        AttractivenessDimension::RecurringRevenues => (
            High,
            "Revenue",
            "Add recurring revenue streams (subscriptions, memberships)",
            "Recurring revenue provides predictability and higher lifetime value",
        ),
        AttractivenessDimension::EarningVsSpending => (
            Medium,
            "Cash Flow",
            "Collect revenue before incurring costs through prepayment or licensing",
            "Earning before spending funds growth without outside capital",
        ),
        AttractivenessDimension::CostStructure => (
            Medium,
            "Costs",
            "Shift fixed costs toward variable costs where possible",
            "A flexible cost structure protects margins when demand changes",
        ),
        AttractivenessDimension::OthersDoWork => (
            Low,
            "Leverage",
            "Let partners or customer communities take on part of the value creation",
            "Models where others do the work grow at lower cost",
        ),
        AttractivenessDimension::Scalability => (
            High,
            "Growth",
            "Increase scalability through automation or platform elements",
            "Scalable business models can grow without proportional cost increases",
        ),
        AttractivenessDimension::Protection => (
            Medium,
            "Defensibility",
            "Build intellectual property or exclusive partnerships",
            "Protection from competition ensures long-term viability",
        ),
    };
    Recommendation::new(priority, category, description, rationale)
}
