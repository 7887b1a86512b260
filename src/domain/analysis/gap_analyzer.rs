//! Gap Analyzer - Structural absences in a canvas.
//!
//! Gaps are advisory display strings, ordered by the check that produced
//! them. They feed the recommendation layer and the rendered report.

use std::collections::BTreeMap;

use crate::domain::canvas::{BusinessModel, JobCategory, ValueDocument};

/// Minimum partnerships before the network counts as established.
pub const MIN_PARTNERSHIPS: usize = 2;

/// Finds structural gaps in either canvas.
pub struct GapAnalyzer;

impl GapAnalyzer {
    pub fn value_document_gaps(doc: &ValueDocument) -> Vec<String> {
        let mut gaps = Vec::new();

        let pains = covered_by_text(
            doc.pains
                .iter()
                .map(|p| (p.description.as_str(), doc.is_pain_relieved(p))),
        );
        let unaddressed = pains.values().filter(|covered| !**covered).count();
        if unaddressed > 0 {
            gaps.push(format!("Unaddressed pains: {} of {}", unaddressed, pains.len()));
        }

        let gains = covered_by_text(
            doc.gains
                .iter()
                .map(|g| (g.description.as_str(), doc.is_gain_created(g))),
        );
        let uncreated = gains.values().filter(|covered| !**covered).count();
        if uncreated > 0 {
            gaps.push(format!("Uncreated gains: {} of {}", uncreated, gains.len()));
        }

        let missing: Vec<&str> = JobCategory::all()
            .iter()
            .filter(|c| !doc.jobs.iter().any(|j| j.category == **c))
            .map(|c| c.as_str())
            .collect();
        if !missing.is_empty() {
            gaps.push(format!("Missing job types: {}", missing.join(", ")));
        }

        let weak_relievers = doc
            .pain_relievers
            .iter()
            .filter(|r| r.effectiveness.is_low())
            .count();
        if weak_relievers > 0 {
            gaps.push(format!("Low-effectiveness pain relievers: {weak_relievers}"));
        }

        let weak_creators = doc
            .gain_creators
            .iter()
            .filter(|c| c.effectiveness.is_low())
            .count();
        if weak_creators > 0 {
            gaps.push(format!("Low-effectiveness gain creators: {weak_creators}"));
        }

        gaps
    }

    pub fn business_model_gaps(model: &BusinessModel) -> Vec<String> {
        let mut gaps = Vec::new();

        let orphaned = model
            .segments
            .iter()
            .filter(|s| !model.has_proposition_for(s))
            .count();
        if orphaned > 0 {
            gaps.push(format!("Segments without value propositions: {orphaned}"));
        }

        let missing = model.uncovered_phases();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
            gaps.push(format!("Missing channel phases: {}", names.join(", ")));
        }

        if !model.revenue_streams.iter().any(|r| r.recurring) {
            gaps.push("No recurring revenue streams identified".to_string());
        }

        if !model.resources.iter().any(|r| r.criticality.is_high()) {
            gaps.push("No highly critical resources identified".to_string());
        }

        if model.partnerships.len() < MIN_PARTNERSHIPS {
            gaps.push("Limited partnership network (fewer than 2 partners)".to_string());
        }

        gaps
    }
}

/// Distinct lowercase texts mapped to whether any item carrying them is linked.
pub(super) fn covered_by_text<'a>(
    items: impl Iterator<Item = (&'a str, bool)>,
) -> BTreeMap<String, bool> {
    let mut texts = BTreeMap::new();
    for (text, covered) in items {
        let entry = texts.entry(text.to_lowercase()).or_insert(false);
        *entry |= covered;
    }
    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_fixtures::{sample_business_model, sample_value_document};
    use crate::domain::canvas::{
        CustomerPain, GainCreator, KeyResource, PainFrequency, PainReliever, ResourceType,
    };

    #[test]
    fn sample_document_has_no_gaps() {
        assert!(GapAnalyzer::value_document_gaps(&sample_value_document()).is_empty());
    }

    #[test]
    fn value_document_gaps_in_order() {
        let mut doc = sample_value_document()
            .with_pain(CustomerPain::new("Too many meetings", 4, PainFrequency::Often))
            .with_pain(CustomerPain::new("too many MEETINGS", 4, PainFrequency::Often))
            .with_pain_reliever(PainReliever::new("Weekly digest", "Inbox overload", 2))
            .with_gain_creator(GainCreator::new("Emoji reactions", "Fun", 1));
        doc.jobs.truncate(1);

        let gaps = GapAnalyzer::value_document_gaps(&doc);
        assert_eq!(
            gaps,
            vec![
                "Unaddressed pains: 1 of 4",
                "Missing job types: social, emotional",
                "Low-effectiveness pain relievers: 1",
                "Low-effectiveness gain creators: 1",
            ]
        );
    }

    #[test]
    fn sample_model_misses_late_phases() {
        assert_eq!(
            GapAnalyzer::business_model_gaps(&sample_business_model()),
            vec!["Missing channel phases: delivery, after_sales"]
        );
    }

    #[test]
    fn bare_model_reports_every_structural_gap() {
        let mut model = sample_business_model();
        model.value_propositions[0].target_segment = "Enterprises".to_string();
        model.revenue_streams[0].recurring = false;
        model.resources = vec![KeyResource::new("Laptop", ResourceType::Physical, 2)];
        model.partnerships.truncate(1);

        assert_eq!(
            GapAnalyzer::business_model_gaps(&model),
            vec![
                "Segments without value propositions: 1",
                "Missing channel phases: delivery, after_sales",
                "No recurring revenue streams identified",
                "No highly critical resources identified",
                "Limited partnership network (fewer than 2 partners)",
            ]
        );
    }
}
