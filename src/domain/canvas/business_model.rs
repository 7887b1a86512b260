//! Business model document: the nine building blocks.

use serde::{Deserialize, Serialize};

use super::categories::{
    tag_or_object, ActivityType, ChannelPhase, CostType, PartnershipType, PricingMechanism,
    RelationshipType, ResourceType, RevenueType, SegmentType,
};
use super::linking::{links_to, texts_match};
use super::{check_count, check_text};
use crate::domain::foundation::{Rating, ValidationError};

/// Stage of business development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStage {
    Idea,
    Startup,
    Growth,
    Mature,
}

/// A customer segment the business serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub segment_type: SegmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_estimate: Option<String>,
    #[serde(default, alias = "is_primary")]
    pub primary: bool,
}

impl CustomerSegment {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        segment_type: SegmentType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            segment_type,
            size_estimate: None,
            primary: false,
        }
    }

    /// Builder: attach an explicit id for reference matching.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: mark as the primary segment.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// A value proposition offered to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueProposition {
    pub description: String,
    pub target_segment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_ref: Option<String>,
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<String>,
}

impl ValueProposition {
    pub fn new(
        description: impl Into<String>,
        target_segment: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            target_segment: target_segment.into(),
            segment_ref: None,
            value_type: value_type.into(),
            differentiation: None,
        }
    }

    /// Builder: target a segment by explicit id.
    pub fn with_segment_ref(mut self, id: impl Into<String>) -> Self {
        self.segment_ref = Some(id.into());
        self
    }

    /// True if this proposition is aimed at the segment.
    pub fn targets(&self, segment: &CustomerSegment) -> bool {
        links_to(
            self.segment_ref.as_deref(),
            &self.target_segment,
            segment.id.as_deref(),
            &segment.name,
        )
    }
}

/// A channel that reaches customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub channel_type: String,
    pub phases: Vec<ChannelPhase>,
    #[serde(default, alias = "is_primary")]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        channel_type: impl Into<String>,
        phases: Vec<ChannelPhase>,
    ) -> Self {
        Self {
            name: name.into(),
            channel_type: channel_type.into(),
            phases,
            primary: false,
            description: None,
        }
    }

    /// Builder: mark as a primary channel.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// A relationship the business maintains with a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRelationship {
    pub segment: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub relationship_type: RelationshipType,
    pub motivation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CustomerRelationship {
    pub fn new(
        segment: impl Into<String>,
        relationship_type: RelationshipType,
        motivation: impl Into<String>,
    ) -> Self {
        Self {
            segment: segment.into(),
            relationship_type,
            motivation: motivation.into(),
            description: None,
        }
    }
}

/// A source of revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueStream {
    pub name: String,
    pub source_segment: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub revenue_type: RevenueType,
    #[serde(deserialize_with = "tag_or_object")]
    pub pricing_mechanism: PricingMechanism,
    #[serde(default, alias = "is_recurring")]
    pub recurring: bool,
    #[serde(default, alias = "percentage_of_revenue", skip_serializing_if = "Option::is_none")]
    pub percent_of_revenue: Option<f64>,
}

impl RevenueStream {
    pub fn new(
        name: impl Into<String>,
        source_segment: impl Into<String>,
        revenue_type: RevenueType,
        pricing_mechanism: PricingMechanism,
    ) -> Self {
        Self {
            name: name.into(),
            source_segment: source_segment.into(),
            revenue_type,
            pricing_mechanism,
            recurring: false,
            percent_of_revenue: None,
        }
    }

    /// Builder: mark as recurring.
    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }
}

/// A resource the model depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResource {
    pub name: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub description: String,
    pub criticality: Rating,
    #[serde(default = "default_owned", alias = "is_owned")]
    pub owned: bool,
}

fn default_owned() -> bool {
    true
}

impl KeyResource {
    pub fn new(name: impl Into<String>, resource_type: ResourceType, criticality: u8) -> Self {
        Self {
            name: name.into(),
            resource_type,
            description: String::new(),
            criticality: Rating::new(criticality),
            owned: true,
        }
    }
}

/// An activity the model depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyActivity {
    pub name: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub description: String,
    pub frequency: String,
}

impl KeyActivity {
    pub fn new(
        name: impl Into<String>,
        activity_type: ActivityType,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            activity_type,
            description: String::new(),
            frequency: frequency.into(),
        }
    }
}

/// A partner the model relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPartnership {
    pub partner_name: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub partnership_type: PartnershipType,
    pub motivation: String,
    #[serde(default, alias = "key_activities")]
    pub supported_activities: Vec<String>,
    #[serde(default, alias = "key_resources")]
    pub supplied_resources: Vec<String>,
}

impl KeyPartnership {
    pub fn new(
        partner_name: impl Into<String>,
        partnership_type: PartnershipType,
        motivation: impl Into<String>,
    ) -> Self {
        Self {
            partner_name: partner_name.into(),
            partnership_type,
            motivation: motivation.into(),
            supported_activities: Vec::new(),
            supplied_resources: Vec::new(),
        }
    }
}

/// A line in the cost structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub name: String,
    #[serde(deserialize_with = "tag_or_object")]
    pub cost_type: CostType,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "is_key_cost")]
    pub key_cost: bool,
    #[serde(default, alias = "percentage_of_costs", skip_serializing_if = "Option::is_none")]
    pub percent_of_costs: Option<f64>,
}

impl CostItem {
    pub fn new(name: impl Into<String>, cost_type: CostType) -> Self {
        Self {
            name: name.into(),
            cost_type,
            description: String::new(),
            key_cost: false,
            percent_of_costs: None,
        }
    }
}

/// The complete business model document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessModel {
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_stage: Option<BusinessStage>,
    #[serde(alias = "customer_segments")]
    pub segments: Vec<CustomerSegment>,
    pub value_propositions: Vec<ValueProposition>,
    pub channels: Vec<Channel>,
    #[serde(alias = "customer_relationships")]
    pub relationships: Vec<CustomerRelationship>,
    pub revenue_streams: Vec<RevenueStream>,
    #[serde(alias = "key_resources")]
    pub resources: Vec<KeyResource>,
    #[serde(alias = "key_activities")]
    pub activities: Vec<KeyActivity>,
    #[serde(alias = "key_partnerships")]
    pub partnerships: Vec<KeyPartnership>,
    #[serde(alias = "cost_structure")]
    pub costs: Vec<CostItem>,
}

impl BusinessModel {
    /// Creates an empty model. Use the `with_*` builders to populate it.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            industry: String::new(),
            business_stage: None,
            segments: Vec::new(),
            value_propositions: Vec::new(),
            channels: Vec::new(),
            relationships: Vec::new(),
            revenue_streams: Vec::new(),
            resources: Vec::new(),
            activities: Vec::new(),
            partnerships: Vec::new(),
            costs: Vec::new(),
        }
    }

    pub fn with_segment(mut self, segment: CustomerSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_value_proposition(mut self, proposition: ValueProposition) -> Self {
        self.value_propositions.push(proposition);
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn with_relationship(mut self, relationship: CustomerRelationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn with_revenue_stream(mut self, stream: RevenueStream) -> Self {
        self.revenue_streams.push(stream);
        self
    }

    pub fn with_resource(mut self, resource: KeyResource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_activity(mut self, activity: KeyActivity) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn with_partnership(mut self, partnership: KeyPartnership) -> Self {
        self.partnerships.push(partnership);
        self
    }

    pub fn with_cost(mut self, cost: CostItem) -> Self {
        self.costs.push(cost);
        self
    }

    /// True if some proposition targets the segment.
    pub fn has_proposition_for(&self, segment: &CustomerSegment) -> bool {
        self.value_propositions.iter().any(|vp| vp.targets(segment))
    }

    /// True if some revenue stream is sourced from the segment.
    pub fn has_revenue_from(&self, segment: &CustomerSegment) -> bool {
        self.revenue_streams
            .iter()
            .any(|r| texts_match(&r.source_segment, &segment.name))
    }

    /// Channel phases not covered by any channel, in journey order.
    pub fn uncovered_phases(&self) -> Vec<ChannelPhase> {
        ChannelPhase::all()
            .iter()
            .copied()
            .filter(|phase| !self.channels.iter().any(|c| c.phases.contains(phase)))
            .collect()
    }

    /// Structural checks performed once at record construction.
    pub fn check_structure(&self) -> Result<(), ValidationError> {
        check_text("company_name", &self.company_name)?;

        check_count("segments", self.segments.len())?;
        check_count("value_propositions", self.value_propositions.len())?;
        check_count("channels", self.channels.len())?;
        check_count("relationships", self.relationships.len())?;
        check_count("revenue_streams", self.revenue_streams.len())?;
        check_count("resources", self.resources.len())?;
        check_count("activities", self.activities.len())?;
        check_count("partnerships", self.partnerships.len())?;
        check_count("costs", self.costs.len())?;

        for segment in &self.segments {
            check_text("segments.name", &segment.name)?;
        }
        for proposition in &self.value_propositions {
            check_text("value_propositions.description", &proposition.description)?;
            check_text("value_propositions.target_segment", &proposition.target_segment)?;
        }
        for channel in &self.channels {
            check_text("channels.name", &channel.name)?;
            if channel.phases.is_empty() {
                return Err(ValidationError::item_count("channels.phases", 1, 5, 0));
            }
        }
        for stream in &self.revenue_streams {
            check_percent("revenue_streams.percent_of_revenue", stream.percent_of_revenue)?;
        }
        for cost in &self.costs {
            check_percent("costs.percent_of_costs", cost.percent_of_costs)?;
        }
        Ok(())
    }
}

fn check_percent(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(0.0..=100.0).contains(&v) => Err(ValidationError::invalid_format(
            field,
            format!("{v} is not a percentage between 0 and 100"),
        )),
        _ => Ok(()),
    }
}
