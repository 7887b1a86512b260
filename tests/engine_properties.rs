//! Property tests for the analysis engine over randomly generated canvases.

use proptest::prelude::*;
use strategy_canvas::domain::analysis::{
    AttractivenessDimension, AttractivenessScorer, FitAnalyzer, FitScore, QualityCriterion,
    QualityScorer, RecommendationEngine, RubricScores, MAX_ATTRACTIVENESS_SCORE,
    RECOMMENDATION_THRESHOLD,
};
use strategy_canvas::domain::canvas::{
    ActivityType, BusinessModel, Channel, ChannelPhase, CostItem, CostType, CustomerGain,
    CustomerJob, CustomerPain, CustomerRelationship, CustomerSegment, GainCategory, GainCreator,
    JobCategory, KeyActivity, KeyPartnership, KeyResource, Offering, PainFrequency, PainReliever,
    PartnershipType, PricingMechanism, RelationshipType, ResourceType, RevenueStream,
    RevenueType, SegmentType, ValueDocument, ValueProposition,
};

const EPSILON: f64 = 1e-9;

// Overlapping phrases so the substring linker both hits and misses.
const TEXTS: [&str; 6] = [
    "Tasks fall through",
    "Tasks",
    "Slow status reports",
    "Missed deadlines",
    "Clear visibility",
    "Remote team managers",
];

fn text() -> impl Strategy<Value = String> {
    prop::sample::select(TEXTS.to_vec()).prop_map(str::to_string)
}

fn rating() -> impl Strategy<Value = u8> {
    1u8..=5
}

fn items<T: std::fmt::Debug>(item: impl Strategy<Value = T>) -> impl Strategy<Value = Vec<T>> {
    prop::collection::vec(item, 1..=10)
}

fn arb_value_document() -> impl Strategy<Value = ValueDocument> {
    let profile = (
        items((text(), prop::sample::select(JobCategory::all()), rating())),
        items((text(), rating(), prop::sample::select(PainFrequency::all()))),
        items((text(), prop::sample::select(GainCategory::all()), rating())),
    );
    let value_map = (
        items((text(), rating(), any::<bool>(), any::<bool>())),
        items((text(), rating())),
        items((text(), rating())),
        prop::collection::vec(text(), 0..4),
    );

    (profile, value_map).prop_map(
        |((jobs, pains, gains), (offerings, relievers, creators, competitors))| {
            let mut doc = ValueDocument::new("TestCo", "Remote team managers");
            for (description, category, importance) in jobs {
                doc = doc.with_job(CustomerJob::new(description, category, importance));
            }
            for (description, intensity, frequency) in pains {
                doc = doc.with_pain(CustomerPain::new(description, intensity, frequency));
            }
            for (description, category, relevance) in gains {
                doc = doc.with_gain(CustomerGain::new(description, category, relevance));
            }
            for (name, importance, digital, intangible) in offerings {
                let mut offering = Offering::new(name, "offering", importance);
                if digital {
                    offering = offering.digital();
                }
                if intangible {
                    offering = offering.intangible();
                }
                doc = doc.with_offering(offering);
            }
            for (target, effectiveness) in relievers {
                doc = doc.with_pain_reliever(PainReliever::new("reliever", target, effectiveness));
            }
            for (target, effectiveness) in creators {
                doc = doc.with_gain_creator(GainCreator::new("creator", target, effectiveness));
            }
            for competitor in competitors {
                doc = doc.with_competitor(competitor);
            }
            doc
        },
    )
}

fn arb_business_model() -> impl Strategy<Value = BusinessModel> {
    let customers = (
        items((text(), prop::sample::select(SegmentType::all()))),
        items((text(), text())),
        items((
            prop::collection::vec(prop::sample::select(ChannelPhase::all()), 1..=5),
            any::<bool>(),
        )),
        items(prop::sample::select(RelationshipType::all())),
    );
    let infrastructure = (
        items((prop::sample::select(RevenueType::all()), any::<bool>())),
        items((prop::sample::select(ResourceType::all()), rating())),
        items(prop::sample::select(ActivityType::all())),
        items(prop::sample::select(PartnershipType::all())),
        items(prop::sample::select(CostType::all())),
    );

    (customers, infrastructure).prop_map(
        |(
            (segments, propositions, channels, relationships),
            (streams, resources, activities, partnerships, costs),
        )| {
            let mut model = BusinessModel::new("TestCo");
            for (name, segment_type) in segments {
                model = model.with_segment(CustomerSegment::new(name, "segment", segment_type));
            }
            for (description, target) in propositions {
                model = model.with_value_proposition(ValueProposition::new(description, target, "value"));
            }
            for (phases, primary) in channels {
                let mut channel = Channel::new("Channel", "owned", phases);
                if primary {
                    channel = channel.primary();
                }
                model = model.with_channel(channel);
            }
            for relationship_type in relationships {
                model = model.with_relationship(CustomerRelationship::new(
                    "Remote team managers",
                    relationship_type,
                    "retention",
                ));
            }
            for (revenue_type, recurring) in streams {
                let mut stream =
                    RevenueStream::new("Stream", "Tasks", revenue_type, PricingMechanism::Fixed);
                if recurring {
                    stream = stream.recurring();
                }
                model = model.with_revenue_stream(stream);
            }
            for (resource_type, criticality) in resources {
                model = model.with_resource(KeyResource::new("Resource", resource_type, criticality));
            }
            for activity_type in activities {
                model = model.with_activity(KeyActivity::new("Activity", activity_type, "weekly"));
            }
            for partnership_type in partnerships {
                model = model.with_partnership(KeyPartnership::new(
                    "Partner",
                    partnership_type,
                    "optimization",
                ));
            }
            for cost_type in costs {
                model = model.with_cost(CostItem::new("Cost", cost_type));
            }
            model
        },
    )
}

proptest! {
    #[test]
    fn prop_quality_criteria_within_bounds(doc in arb_value_document()) {
        let score = QualityScorer::score(&doc);
        for &criterion in QualityCriterion::all() {
            let value = score.score(criterion);
            prop_assert!((1.0 - EPSILON..=5.0 + EPSILON).contains(&value), "{} = {}", criterion, value);
        }
        prop_assert!(score.total <= score.max + EPSILON);
        prop_assert!(score.percentage <= 100.0 + EPSILON);
    }

    #[test]
    fn prop_attractiveness_dimensions_within_bounds(model in arb_business_model()) {
        let score = AttractivenessScorer::score(&model);
        for &dimension in AttractivenessDimension::all() {
            let value = score.score(dimension);
            prop_assert!(
                (dimension.base() - EPSILON..=5.0 + EPSILON).contains(&value),
                "{} = {}", dimension, value
            );
        }
        prop_assert!(score.total <= MAX_ATTRACTIVENESS_SCORE + EPSILON);
    }

    #[test]
    fn prop_scoring_is_deterministic(doc in arb_value_document(), model in arb_business_model()) {
        prop_assert_eq!(QualityScorer::score(&doc), QualityScorer::score(&doc));
        prop_assert_eq!(AttractivenessScorer::score(&model), AttractivenessScorer::score(&model));
        prop_assert_eq!(
            FitAnalyzer::analyze_internal_fit(&doc),
            FitAnalyzer::analyze_internal_fit(&doc)
        );
        prop_assert_eq!(
            FitAnalyzer::analyze_alignment(&doc, &model),
            FitAnalyzer::analyze_alignment(&doc, &model)
        );
    }

    #[test]
    fn prop_overall_fit_is_mean_of_components(
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
        c in 0.0f64..=100.0,
        d in 0.0f64..=100.0,
    ) {
        let fit = FitScore::from_components(a, b, c, d);
        prop_assert!((fit.overall_fit - (a + b + c + d) / 4.0).abs() < EPSILON);
    }

    #[test]
    fn prop_internal_fit_components_are_percentages(doc in arb_value_document()) {
        let fit = FitAnalyzer::analyze_internal_fit(&doc);
        for value in [
            fit.problem_solution_fit,
            fit.product_market_fit_indicators,
            fit.pain_coverage,
            fit.gain_coverage,
        ] {
            prop_assert!((0.0..=100.0 + EPSILON).contains(&value));
        }
        let mean = (fit.problem_solution_fit
            + fit.product_market_fit_indicators
            + fit.pain_coverage
            + fit.gain_coverage)
            / 4.0;
        prop_assert!((fit.overall_fit - mean).abs() < EPSILON);
    }

    #[test]
    fn prop_alignment_never_exceeds_one_hundred(
        doc in arb_value_document(),
        model in arb_business_model(),
    ) {
        let result = FitAnalyzer::analyze_alignment(&doc, &model);
        prop_assert!(result.fit_score >= 0.0);
        prop_assert!(result.fit_score <= 100.0);
    }

    #[test]
    fn prop_rubric_recommendations_skip_strong_criteria(doc in arb_value_document()) {
        let score = QualityScorer::score(&doc);
        let recs = RecommendationEngine::for_rubric(RubricScores::Quality(&score));
        prop_assert!(recs.len() <= 3);

        let weak = QualityCriterion::all()
            .iter()
            .filter(|&&c| score.score(c) < RECOMMENDATION_THRESHOLD)
            .count();
        prop_assert_eq!(recs.len(), weak.min(3));
    }

    #[test]
    fn prop_attractiveness_recommendations_capped(model in arb_business_model()) {
        let score = AttractivenessScorer::score(&model);
        let recs = RecommendationEngine::for_rubric(RubricScores::Attractiveness(&score));
        let weak = AttractivenessDimension::all()
            .iter()
            .filter(|&&d| score.score(d) < RECOMMENDATION_THRESHOLD)
            .count();
        prop_assert_eq!(recs.len(), weak.min(3));
    }
}
