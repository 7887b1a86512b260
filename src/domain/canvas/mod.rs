//! Canvas records - the structured input the analysis engine consumes.
//!
//! Records are built once per request from already-parsed input and are
//! read-only afterwards. Category fields are closed enums; cross-references
//! between items go through [`linking`].

mod business_model;
mod categories;
mod competitor;
pub mod linking;
mod value_document;

pub use business_model::{
    BusinessModel, BusinessStage, Channel, CostItem, CustomerRelationship, CustomerSegment,
    KeyActivity, KeyPartnership, KeyResource, RevenueStream, ValueProposition,
};
pub use categories::{
    ActivityType, ChannelPhase, CostType, GainCategory, JobCategory, PainFrequency,
    PartnershipType, PricingMechanism, RelationshipType, ResourceType, RevenueType, SegmentType,
};
pub use competitor::CompetitorSummary;
pub use value_document::{
    CustomerGain, CustomerJob, CustomerPain, GainCreator, Offering, PainReliever, ValueDocument,
};

use crate::domain::foundation::ValidationError;

/// Minimum items per canvas collection.
pub const MIN_ITEMS: usize = 1;

/// Maximum items per canvas collection.
pub const MAX_ITEMS: usize = 10;

fn check_count(field: &str, actual: usize) -> Result<(), ValidationError> {
    if !(MIN_ITEMS..=MAX_ITEMS).contains(&actual) {
        return Err(ValidationError::item_count(field, MIN_ITEMS, MAX_ITEMS, actual));
    }
    Ok(())
}

fn check_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}
