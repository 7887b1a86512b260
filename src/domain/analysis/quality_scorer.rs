//! Quality Scorer - Ten weighted criteria for a value document.
//!
//! Each criterion is an independent pure function scoring 0-5 (in practice
//! 1-5 for any structurally valid document). The total is out of 50.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::canvas::{JobCategory, ValueDocument};

/// Highest score any single criterion can reach.
pub const MAX_CRITERION_SCORE: f64 = 5.0;

/// The ten quality criteria for a value proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCriterion {
    #[serde(rename = "embedded_in_great_business_model")]
    EmbeddedInBusinessModel,
    FocusOnMostImportant,
    FocusOnUnsatisfied,
    ConvergeOnFewThings,
    AddressAllJobTypes,
    AlignWithSuccessMetrics,
    FocusOnHighImpact,
    DifferentiateFromCompetition,
    OutperformCompetition,
    DifficultToCopy,
}

impl QualityCriterion {
    /// All criteria in canonical order.
    pub fn all() -> &'static [QualityCriterion] {
        &[
            QualityCriterion::EmbeddedInBusinessModel,
            QualityCriterion::FocusOnMostImportant,
            QualityCriterion::FocusOnUnsatisfied,
            QualityCriterion::ConvergeOnFewThings,
            QualityCriterion::AddressAllJobTypes,
            QualityCriterion::AlignWithSuccessMetrics,
            QualityCriterion::FocusOnHighImpact,
            QualityCriterion::DifferentiateFromCompetition,
            QualityCriterion::OutperformCompetition,
            QualityCriterion::DifficultToCopy,
        ]
    }

    /// Stable key used in serialized breakdowns.
    pub fn key(&self) -> &'static str {
        match self {
            QualityCriterion::EmbeddedInBusinessModel => "embedded_in_great_business_model",
            QualityCriterion::FocusOnMostImportant => "focus_on_most_important",
            QualityCriterion::FocusOnUnsatisfied => "focus_on_unsatisfied",
            QualityCriterion::ConvergeOnFewThings => "converge_on_few_things",
            QualityCriterion::AddressAllJobTypes => "address_all_job_types",
            QualityCriterion::AlignWithSuccessMetrics => "align_with_success_metrics",
            QualityCriterion::FocusOnHighImpact => "focus_on_high_impact",
            QualityCriterion::DifferentiateFromCompetition => "differentiate_from_competition",
            QualityCriterion::OutperformCompetition => "outperform_competition",
            QualityCriterion::DifficultToCopy => "difficult_to_copy",
        }
    }
}

impl fmt::Display for QualityCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Quality score with per-criterion breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub breakdown: BTreeMap<QualityCriterion, f64>,
    pub total: f64,
    pub max: f64,
    /// total / max * 100, rounded to one decimal.
    pub percentage: f64,
}

impl QualityScore {
    /// Builds the aggregate from a criterion breakdown.
    pub fn from_breakdown(breakdown: BTreeMap<QualityCriterion, f64>) -> Self {
        let total: f64 = breakdown.values().sum();
        let max = breakdown.len() as f64 * MAX_CRITERION_SCORE;
        let percentage = if max > 0.0 {
            round_one_decimal(total / max * 100.0)
        } else {
            0.0
        };
        Self {
            breakdown,
            total,
            max,
            percentage,
        }
    }

    /// Score for one criterion (0 if absent).
    pub fn score(&self, criterion: QualityCriterion) -> f64 {
        self.breakdown.get(&criterion).copied().unwrap_or(0.0)
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_CRITERION_SCORE)
}

/// Scores a value document against the ten quality criteria.
pub struct QualityScorer;

impl QualityScorer {
    /// Scores every criterion and aggregates.
    pub fn score(doc: &ValueDocument) -> QualityScore {
        let breakdown = QualityCriterion::all()
            .iter()
            .map(|&criterion| (criterion, Self::score_criterion(doc, criterion)))
            .collect();
        QualityScore::from_breakdown(breakdown)
    }

    /// Scores a single criterion.
    pub fn score_criterion(doc: &ValueDocument, criterion: QualityCriterion) -> f64 {
        let raw = match criterion {
            QualityCriterion::EmbeddedInBusinessModel => Self::completeness(doc),
            QualityCriterion::FocusOnMostImportant => Self::importance_focus(doc),
            QualityCriterion::FocusOnUnsatisfied => Self::unsatisfied_focus(doc),
            QualityCriterion::ConvergeOnFewThings => Self::convergence(doc),
            QualityCriterion::AddressAllJobTypes => Self::job_type_coverage(doc),
            QualityCriterion::AlignWithSuccessMetrics => Self::alignment(doc),
            QualityCriterion::FocusOnHighImpact => Self::high_impact(doc),
            QualityCriterion::DifferentiateFromCompetition => Self::differentiation(doc),
            QualityCriterion::OutperformCompetition => Self::outperformance(doc),
            QualityCriterion::DifficultToCopy => Self::copy_resistance(doc),
        };
        clamp_score(raw)
    }

    /// Balanced 3-5 items per category and relievers/creators for at least
    /// 60% of pains/gains.
    fn completeness(doc: &ValueDocument) -> f64 {
        let balanced = |n: usize| (3..=5).contains(&n);
        let mut score = 1.0;

        if balanced(doc.jobs.len()) {
            score += 1.0;
        }
        if balanced(doc.pains.len()) && balanced(doc.gains.len()) {
            score += 1.0;
        }
        if doc.pain_relievers.len() as f64 >= doc.pains.len() as f64 * 0.6 {
            score += 1.0;
        }
        if doc.gain_creators.len() as f64 >= doc.gains.len() as f64 * 0.6 {
            score += 1.0;
        }
        score
    }

    /// Average job importance.
    fn importance_focus(doc: &ValueDocument) -> f64 {
        if doc.jobs.is_empty() {
            return 0.0;
        }
        let total: f64 = doc.jobs.iter().map(|j| j.importance.as_f64()).sum();
        total / doc.jobs.len() as f64
    }

    /// High-effectiveness relievers per high-intensity pain.
    fn unsatisfied_focus(doc: &ValueDocument) -> f64 {
        let intense = doc.pains.iter().filter(|p| p.intensity.is_high()).count();
        if intense == 0 {
            return 3.0;
        }
        let strong = doc
            .pain_relievers
            .iter()
            .filter(|r| r.effectiveness.is_high())
            .count();
        1.0 + ratio(strong, intense) * 4.0
    }

    /// Fewer, more central offerings score higher.
    fn convergence(doc: &ValueDocument) -> f64 {
        let total = doc.offerings.len();
        let core = doc.offerings.iter().filter(|o| o.importance.is_high()).count();

        if core <= 3 && total <= 5 {
            5.0
        } else if core <= 5 {
            4.0
        } else if total <= 7 {
            3.0
        } else {
            2.0
        }
    }

    fn job_type_coverage(doc: &ValueDocument) -> f64 {
        let distinct = JobCategory::all()
            .iter()
            .filter(|category| doc.jobs.iter().any(|j| j.category == **category))
            .count();
        match distinct {
            3 => 5.0,
            2 => 3.5,
            _ => 2.0,
        }
    }

    /// Share of relievers whose target resolves to a declared pain.
    fn alignment(doc: &ValueDocument) -> f64 {
        let aligned = doc
            .pain_relievers
            .iter()
            .filter(|r| doc.pains.iter().any(|p| r.addresses(p)))
            .count();
        1.0 + ratio(aligned, doc.pain_relievers.len()) * 4.0
    }

    /// Share of jobs, pains and gains rated 4 or higher.
    fn high_impact(doc: &ValueDocument) -> f64 {
        let high = doc.jobs.iter().filter(|j| j.importance.is_high()).count()
            + doc.pains.iter().filter(|p| p.intensity.is_high()).count()
            + doc.gains.iter().filter(|g| g.relevance.is_high()).count();
        let total = doc.jobs.len() + doc.pains.len() + doc.gains.len();
        1.0 + ratio(high, total) * 4.0
    }

    fn differentiation(doc: &ValueDocument) -> f64 {
        if !doc.competitors.is_empty() {
            return 4.0;
        }
        let core = doc.offerings.iter().filter(|o| o.importance.is_high()).count();
        2.0 + core as f64
    }

    /// Mean of average reliever and average creator effectiveness.
    fn outperformance(doc: &ValueDocument) -> f64 {
        let mean = |values: Vec<f64>| {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        };
        let relievers = mean(doc.pain_relievers.iter().map(|r| r.effectiveness.as_f64()).collect());
        let creators = mean(doc.gain_creators.iter().map(|c| c.effectiveness.as_f64()).collect());
        (relievers + creators) / 2.0
    }

    fn copy_resistance(doc: &ValueDocument) -> f64 {
        let mut score = 2.0;
        if doc.offerings.iter().any(|o| o.digital) {
            score += 1.0;
        }
        if doc.offerings.iter().any(|o| !o.tangible) {
            score += 1.0;
        }
        if doc.offerings.len() >= 3 {
            score += 0.5;
        }
        score
    }
}
