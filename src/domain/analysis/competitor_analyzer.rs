//! Competitor Analyzer - Positions a value document against competitor
//! summaries.
//!
//! Overlap is exact set membership on lowercased reliever/creator target
//! texts. Text sets are ordered so every listing is lexicographic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::canvas::{CompetitorSummary, ValueDocument};

/// Total overlap above which a top-ranked competitor is a threat.
pub const THREAT_OVERLAP_THRESHOLD: usize = 3;

/// How many of the highest-overlap competitors are considered for threats.
pub const MAX_THREATS: usize = 2;

/// How many texts a strength/weakness line lists.
const MAX_LISTED: usize = 3;

/// Difficulty for competitors to replicate the offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CopyDifficulty {
    Low,
    Medium,
    High,
}

impl CopyDifficulty {
    /// Phrase completing a positioning statement.
    pub fn defensibility(&self) -> &'static str {
        match self {
            CopyDifficulty::High => "with strong barriers to imitation",
            CopyDifficulty::Medium => "with moderate defensibility",
            CopyDifficulty::Low => "but should work on building defensible advantages",
        }
    }
}

/// Overlap between the subject and one competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorOverlap {
    pub name: String,
    pub pain_overlap: usize,
    pub gain_overlap: usize,
    pub total_overlap: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub differentiation_opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub positioning_recommendations: Vec<String>,
    /// Ranked by total overlap, highest first; ties keep input order.
    pub overlaps: Vec<CompetitorOverlap>,
    pub copy_difficulty: CopyDifficulty,
}

impl CompetitiveAnalysis {
    /// One-sentence positioning, or `None` without strengths.
    pub fn positioning_statement(&self, company_name: &str) -> Option<String> {
        let summary = match self.strengths.as_slice() {
            [] => return None,
            [only] => only.clone(),
            [first, second, ..] => format!("{first} and {second}"),
        };
        Some(format!(
            "{} can position around {}, {}.",
            company_name,
            summary.to_lowercase(),
            self.copy_difficulty.defensibility()
        ))
    }
}

/// Compares a value document against competitor summaries. Stateless.
pub struct CompetitorAnalyzer;

impl CompetitorAnalyzer {
    pub fn compare(doc: &ValueDocument, competitors: &[CompetitorSummary]) -> CompetitiveAnalysis {
        let our_pains = lowercase_set(doc.pain_relievers.iter().map(|r| r.target_pain.as_str()));
        let our_gains = lowercase_set(doc.gain_creators.iter().map(|c| c.target_gain.as_str()));

        let mut overlaps = Vec::with_capacity(competitors.len());
        let mut their_pains = BTreeSet::new();
        let mut their_gains = BTreeSet::new();

        for competitor in competitors {
            let pains = lowercase_set(competitor.pain_relievers.iter().map(String::as_str));
            let gains = lowercase_set(competitor.gain_creators.iter().map(String::as_str));

            let pain_overlap = our_pains.intersection(&pains).count();
            let gain_overlap = our_gains.intersection(&gains).count();
            overlaps.push(CompetitorOverlap {
                name: competitor.name.clone(),
                pain_overlap,
                gain_overlap,
                total_overlap: pain_overlap + gain_overlap,
            });

            their_pains.extend(pains);
            their_gains.extend(gains);
        }

        // Stable: equal overlaps keep input order.
        overlaps.sort_by(|a, b| b.total_overlap.cmp(&a.total_overlap));

        let unique_pains: Vec<&String> = our_pains.difference(&their_pains).collect();
        let unique_gains: Vec<&String> = our_gains.difference(&their_gains).collect();
        let missing_pains: Vec<&String> = their_pains.difference(&our_pains).collect();
        let missing_gains: Vec<&String> = their_gains.difference(&our_gains).collect();

        let mut strengths = Vec::new();
        let mut differentiation_opportunities = Vec::new();
        if !unique_pains.is_empty() {
            strengths.push(format!("Unique pain relief in: {}", listing(&unique_pains)));
            differentiation_opportunities
                .push("Emphasize your unique pain relievers in marketing".to_string());
        }
        if !unique_gains.is_empty() {
            strengths.push(format!("Unique gain creation in: {}", listing(&unique_gains)));
            differentiation_opportunities
                .push("Emphasize your unique gain creators in marketing".to_string());
        }

        let mut weaknesses = Vec::new();
        if !missing_pains.is_empty() {
            weaknesses.push(format!(
                "Competitors address pains you don't: {}",
                listing(&missing_pains)
            ));
        }
        if !missing_gains.is_empty() {
            weaknesses.push(format!(
                "Competitors create gains you don't: {}",
                listing(&missing_gains)
            ));
        }

        let threats = overlaps
            .iter()
            .take(MAX_THREATS)
            .filter(|o| o.total_overlap > THREAT_OVERLAP_THRESHOLD)
            .map(|o| format!("{}: High overlap ({} areas)", o.name, o.total_overlap))
            .collect();

        let mut positioning_recommendations = Vec::new();
        if !strengths.is_empty() {
            positioning_recommendations.push(
                "Position around your unique value - areas competitors don't address".to_string(),
            );
        }
        if !weaknesses.is_empty() {
            positioning_recommendations.push(
                "Consider expanding to address gaps where competitors have advantage".to_string(),
            );
        }

        CompetitiveAnalysis {
            strengths,
            weaknesses,
            differentiation_opportunities,
            threats,
            positioning_recommendations,
            overlaps,
            copy_difficulty: Self::copy_difficulty(doc),
        }
    }

    /// Low by default; Medium with 2+ digital or 2+ intangible offerings;
    /// High with both.
    pub fn copy_difficulty(doc: &ValueDocument) -> CopyDifficulty {
        let digital = doc.offerings.iter().filter(|o| o.digital).count() >= 2;
        let intangible = doc.offerings.iter().filter(|o| !o.tangible).count() >= 2;
        match (digital, intangible) {
            (true, true) => CopyDifficulty::High,
            (true, false) | (false, true) => CopyDifficulty::Medium,
            (false, false) => CopyDifficulty::Low,
        }
    }
}

fn lowercase_set<'a>(texts: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    texts.map(str::to_lowercase).collect()
}

fn listing(texts: &[&String]) -> String {
    texts
        .iter()
        .take(MAX_LISTED)
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
