//! Analysis Module - The scoring, validation and fit-analysis engine.
//!
//! # Components
//!
//! - `QualityScorer` - Ten criteria for a value document (max 50)
//! - `AttractivenessScorer` - Seven dimensions for a business model (max 35)
//! - `CanvasValidator` - Warnings and suggestions per canvas type
//! - `GapAnalyzer` - Structural absences as display strings
//! - `FitAnalyzer` - Internal fit and cross-canvas alignment
//! - `CompetitorAnalyzer` - Overlap, strengths and threats against competitors
//! - `RecommendationEngine` - Prioritized actions from all of the above
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. They take canvas records as input
//! and return newly allocated results; identical input always yields
//! identical output. No ports or adapters are needed since there is no I/O.

mod attractiveness_scorer;
mod competitor_analyzer;
mod fit_analyzer;
mod gap_analyzer;
mod quality_scorer;
mod recommendation_engine;
mod validator;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use attractiveness_scorer::{
    AttractivenessDimension, AttractivenessScore, AttractivenessScorer, MAX_ATTRACTIVENESS_SCORE,
};
pub use competitor_analyzer::{
    CompetitiveAnalysis, CompetitorAnalyzer, CompetitorOverlap, CopyDifficulty,
    THREAT_OVERLAP_THRESHOLD,
};
pub use fit_analyzer::{AlignmentOutcome, AlignmentResult, FitAnalyzer, FitInterpretation, FitScore};
pub use gap_analyzer::GapAnalyzer;
pub use quality_scorer::{QualityCriterion, QualityScore, QualityScorer, MAX_CRITERION_SCORE};
pub use recommendation_engine::{
    Recommendation, RecommendationEngine, RecommendationPriority, RubricScores,
    RECOMMENDATION_THRESHOLD,
};
pub use validator::{CanvasValidator, ValidationResult};
