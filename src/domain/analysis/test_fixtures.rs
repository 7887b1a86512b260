//! Sample canvases shared by analysis unit tests.

use crate::domain::canvas::{
    ActivityType, BusinessModel, Channel, ChannelPhase, CostItem, CostType, CustomerGain,
    CustomerJob, CustomerPain, CustomerRelationship, CustomerSegment, GainCategory, GainCreator,
    JobCategory, KeyActivity, KeyPartnership, KeyResource, Offering, PainFrequency, PainReliever,
    PartnershipType, PricingMechanism, RelationshipType, ResourceType, RevenueStream,
    RevenueType, SegmentType, ValueDocument, ValueProposition,
};

/// Remote-team coordination tool with full coverage.
pub(crate) fn sample_value_document() -> ValueDocument {
    ValueDocument::new("TestCo", "Remote team managers")
        .with_job(CustomerJob::new("Coordinate team tasks", JobCategory::Functional, 5))
        .with_job(CustomerJob::new("Be seen as effective leader", JobCategory::Social, 4))
        .with_job(CustomerJob::new("Feel in control of projects", JobCategory::Emotional, 3))
        .with_pain(CustomerPain::new("Tasks fall through cracks", 5, PainFrequency::Often))
        .with_pain(CustomerPain::new("Timezone coordination is hard", 4, PainFrequency::Always))
        .with_pain(CustomerPain::new("Status updates take too long", 3, PainFrequency::Often))
        .with_gain(CustomerGain::new("Clear visibility into workload", GainCategory::Required, 5))
        .with_gain(CustomerGain::new("Automated progress tracking", GainCategory::Expected, 4))
        .with_gain(CustomerGain::new("Real-time collaboration", GainCategory::Desired, 3))
        .with_offering(Offering::new("TaskSync", "AI-powered task coordination", 5).digital())
        .with_offering(Offering::new("TimeZone Scheduler", "Smart meeting scheduler", 4).digital())
        .with_pain_reliever(PainReliever::new(
            "AI monitors and flags at-risk tasks",
            "Tasks fall through cracks",
            5,
        ))
        .with_pain_reliever(PainReliever::new(
            "Automatic timezone-aware scheduling",
            "Timezone coordination is hard",
            4,
        ))
        .with_pain_reliever(PainReliever::new(
            "Auto-generated status reports",
            "Status updates take too long",
            4,
        ))
        .with_gain_creator(GainCreator::new(
            "Real-time dashboard with workload view",
            "Clear visibility into workload",
            5,
        ))
        .with_gain_creator(GainCreator::new(
            "Automatic progress tracking",
            "Automated progress tracking",
            4,
        ))
        .with_gain_creator(GainCreator::new(
            "Integrated collaboration tools",
            "Real-time collaboration",
            3,
        ))
        .with_competitor("Asana")
        .with_competitor("Monday.com")
        .with_competitor("ClickUp")
}

/// SaaS business model matching [`sample_value_document`].
pub(crate) fn sample_business_model() -> BusinessModel {
    BusinessModel::new("TestCo")
        .with_segment(
            CustomerSegment::new(
                "Remote Team Managers",
                "Managers of distributed teams at growing startups",
                SegmentType::Niche,
            )
            .primary(),
        )
        .with_value_proposition(ValueProposition::new(
            "AI-powered task coordination for distributed teams",
            "Remote Team Managers",
            "convenience",
        ))
        .with_channel(
            Channel::new(
                "Website",
                "owned",
                vec![ChannelPhase::Awareness, ChannelPhase::Evaluation, ChannelPhase::Purchase],
            )
            .primary(),
        )
        .with_channel(Channel::new("Product Hunt", "partner", vec![ChannelPhase::Awareness]))
        .with_relationship(CustomerRelationship::new(
            "Remote Team Managers",
            RelationshipType::SelfService,
            "acquisition",
        ))
        .with_relationship(CustomerRelationship::new(
            "Remote Team Managers",
            RelationshipType::Automated,
            "retention",
        ))
        .with_revenue_stream(
            RevenueStream::new(
                "SaaS Subscription",
                "Remote Team Managers",
                RevenueType::Subscription,
                PricingMechanism::Fixed,
            )
            .recurring(),
        )
        .with_resource(KeyResource::new("AI Model", ResourceType::Intellectual, 5))
        .with_resource(KeyResource::new("Engineering Team", ResourceType::Human, 4))
        .with_activity(KeyActivity::new("Platform Development", ActivityType::Platform, "ongoing"))
        .with_activity(KeyActivity::new(
            "AI Model Training",
            ActivityType::ProblemSolving,
            "weekly",
        ))
        .with_partnership(KeyPartnership::new(
            "Cloud Provider",
            PartnershipType::BuyerSupplier,
            "optimization",
        ))
        .with_partnership(KeyPartnership::new(
            "Calendar APIs",
            PartnershipType::StrategicAlliance,
            "resource_acquisition",
        ))
        .with_cost(CostItem::new("Cloud Infrastructure", CostType::Variable))
        .with_cost(CostItem::new("Salaries", CostType::Fixed))
}
