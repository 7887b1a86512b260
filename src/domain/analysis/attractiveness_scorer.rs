//! Attractiveness Scorer - Seven business model dimensions, max 35 points.
//!
//! Every dimension starts at a base value and accumulates fixed bonuses
//! when qualifying conditions hold, clamped to `[base, 5]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::quality_scorer::{round_one_decimal, MAX_CRITERION_SCORE};
use crate::domain::canvas::{ActivityType, BusinessModel, CostType, ResourceType, RevenueType, SegmentType};

/// Maximum attractiveness total (7 dimensions x 5).
pub const MAX_ATTRACTIVENESS_SCORE: f64 = 35.0;

/// The seven attractiveness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractivenessDimension {
    SwitchingCosts,
    RecurringRevenues,
    EarningVsSpending,
    CostStructure,
    OthersDoWork,
    Scalability,
    Protection,
}

impl AttractivenessDimension {
    /// All dimensions in canonical order.
    pub fn all() -> &'static [AttractivenessDimension] {
        &[
            AttractivenessDimension::SwitchingCosts,
            AttractivenessDimension::RecurringRevenues,
            AttractivenessDimension::EarningVsSpending,
            AttractivenessDimension::CostStructure,
            AttractivenessDimension::OthersDoWork,
            AttractivenessDimension::Scalability,
            AttractivenessDimension::Protection,
        ]
    }

    /// Floor of the dimension's score range.
    pub fn base(&self) -> f64 {
        match self {
            AttractivenessDimension::EarningVsSpending => 2.0,
            _ => 1.0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AttractivenessDimension::SwitchingCosts => "switching_costs",
            AttractivenessDimension::RecurringRevenues => "recurring_revenues",
            AttractivenessDimension::EarningVsSpending => "earning_vs_spending",
            AttractivenessDimension::CostStructure => "cost_structure",
            AttractivenessDimension::OthersDoWork => "others_do_work",
            AttractivenessDimension::Scalability => "scalability",
            AttractivenessDimension::Protection => "protection",
        }
    }
}

impl fmt::Display for AttractivenessDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Attractiveness assessment of a business model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractivenessScore {
    pub switching_costs: f64,
    pub recurring_revenues: f64,
    pub earning_vs_spending: f64,
    pub cost_structure: f64,
    pub others_do_work: f64,
    pub scalability: f64,
    pub protection: f64,
    /// Unclamped sum of the seven dimensions.
    pub total: f64,
    pub max: f64,
    pub percentage: f64,
}

impl AttractivenessScore {
    /// Score for one dimension.
    pub fn score(&self, dimension: AttractivenessDimension) -> f64 {
        match dimension {
            AttractivenessDimension::SwitchingCosts => self.switching_costs,
            AttractivenessDimension::RecurringRevenues => self.recurring_revenues,
            AttractivenessDimension::EarningVsSpending => self.earning_vs_spending,
            AttractivenessDimension::CostStructure => self.cost_structure,
            AttractivenessDimension::OthersDoWork => self.others_do_work,
            AttractivenessDimension::Scalability => self.scalability,
            AttractivenessDimension::Protection => self.protection,
        }
    }

    /// Dimensions paired with their scores, in canonical order.
    pub fn dimensions(&self) -> Vec<(AttractivenessDimension, f64)> {
        AttractivenessDimension::all()
            .iter()
            .map(|&d| (d, self.score(d)))
            .collect()
    }
}

/// Scores a business model on the seven attractiveness dimensions.
pub struct AttractivenessScorer;

impl AttractivenessScorer {
    pub fn score(model: &BusinessModel) -> AttractivenessScore {
        let dim = |d: AttractivenessDimension| Self::score_dimension(model, d);

        let switching_costs = dim(AttractivenessDimension::SwitchingCosts);
        let recurring_revenues = dim(AttractivenessDimension::RecurringRevenues);
        let earning_vs_spending = dim(AttractivenessDimension::EarningVsSpending);
        let cost_structure = dim(AttractivenessDimension::CostStructure);
        let others_do_work = dim(AttractivenessDimension::OthersDoWork);
        let scalability = dim(AttractivenessDimension::Scalability);
        let protection = dim(AttractivenessDimension::Protection);

        let total = switching_costs
            + recurring_revenues
            + earning_vs_spending
            + cost_structure
            + others_do_work
            + scalability
            + protection;

        AttractivenessScore {
            switching_costs,
            recurring_revenues,
            earning_vs_spending,
            cost_structure,
            others_do_work,
            scalability,
            protection,
            total,
            max: MAX_ATTRACTIVENESS_SCORE,
            percentage: round_one_decimal(total / MAX_ATTRACTIVENESS_SCORE * 100.0),
        }
    }

    /// Scores one dimension, clamped to `[base, 5]`.
    pub fn score_dimension(model: &BusinessModel, dimension: AttractivenessDimension) -> f64 {
        let base = dimension.base();
        let bonus = match dimension {
            AttractivenessDimension::SwitchingCosts => Self::switching_costs(model),
            AttractivenessDimension::RecurringRevenues => Self::recurring_revenues(model),
            AttractivenessDimension::EarningVsSpending => Self::earning_vs_spending(model),
            AttractivenessDimension::CostStructure => Self::cost_structure(model),
            AttractivenessDimension::OthersDoWork => Self::others_do_work(model),
            AttractivenessDimension::Scalability => Self::scalability(model),
            AttractivenessDimension::Protection => Self::protection(model),
        };
        (base + bonus).clamp(base, MAX_CRITERION_SCORE)
    }

    fn switching_costs(model: &BusinessModel) -> f64 {
        let mut bonus = 0.0;
        if model.relationships.iter().any(|r| r.relationship_type.creates_lock_in()) {
            bonus += 2.0;
        }
        if model.resources.iter().any(|r| r.resource_type == ResourceType::Intellectual) {
            bonus += 1.5;
        }
        if model.channels.len() >= 3 {
            bonus += 0.5;
        }
        bonus
    }

    fn recurring_revenues(model: &BusinessModel) -> f64 {
        let recurring = model.revenue_streams.iter().filter(|r| r.recurring).count();
        let mut bonus = recurring as f64 * 1.5;
        if model
            .revenue_streams
            .iter()
            .any(|r| r.revenue_type == RevenueType::Subscription)
        {
            bonus += 1.0;
        }
        bonus
    }

    fn earning_vs_spending(model: &BusinessModel) -> f64 {
        let mut bonus = 0.0;
        if model.revenue_streams.iter().any(|r| r.revenue_type.is_prepaid()) {
            bonus += 1.5;
        }
        let variable = model.costs.iter().filter(|c| c.cost_type == CostType::Variable).count();
        if variable as f64 > model.costs.len() as f64 / 2.0 {
            bonus += 1.5;
        }
        bonus
    }

    /// More variable costs means more flexibility; neutral 2 with no costs.
    fn cost_structure(model: &BusinessModel) -> f64 {
        if model.costs.is_empty() {
            return 1.0;
        }
        let variable = model.costs.iter().filter(|c| c.cost_type == CostType::Variable).count();
        variable as f64 / model.costs.len() as f64 * 4.0
    }

    fn others_do_work(model: &BusinessModel) -> f64 {
        let mut bonus = 0.0;
        if model.partnerships.len() >= 3 {
            bonus += 2.0;
        }
        if model.relationships.iter().any(|r| r.relationship_type.is_community_driven()) {
            bonus += 2.0;
        }
        bonus
    }

    fn scalability(model: &BusinessModel) -> f64 {
        let mut bonus = 0.0;
        if model.resources.iter().any(|r| {
            matches!(r.resource_type, ResourceType::Intellectual | ResourceType::Financial)
        }) {
            bonus += 1.5;
        }
        if model.activities.iter().any(|a| a.activity_type == ActivityType::Platform) {
            bonus += 2.0;
        }
        if model.relationships.iter().any(|r| r.relationship_type.is_automated()) {
            bonus += 1.0;
        }
        bonus
    }

    fn protection(model: &BusinessModel) -> f64 {
        let mut bonus = 0.0;
        if model
            .resources
            .iter()
            .any(|r| r.resource_type == ResourceType::Intellectual && r.criticality.is_high())
        {
            bonus += 2.0;
        }
        if model.partnerships.iter().any(|p| p.partnership_type.is_strategic()) {
            bonus += 1.5;
        }
        if model.segments.iter().any(|s| s.segment_type == SegmentType::Niche) {
            bonus += 0.5;
        }
        bonus
    }
}
