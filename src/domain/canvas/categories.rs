//! Closed category enumerations shared by both canvases.
//!
//! Category fields are accepted either as a plain tag (`"functional"`) or as
//! an object carrying the tag under `value` (`{"value": "functional"}`).
//! Both shapes resolve to the same variant at deserialization time, so the
//! analysis layer only ever sees the enum.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A closed set of category tags.
pub(crate) trait CategoryTag {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    /// Match tags regardless of letter case.
    const CASE_INSENSITIVE: bool = false;
}

/// Accepts a category as a plain tag or as `{"value": tag}`.
///
/// The inner tag is resolved with `T`'s own deserializer so an unknown tag
/// reports the offending value and the accepted ones.
pub(crate) fn tag_or_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + CategoryTag,
{
    let tag = match Value::deserialize(deserializer)? {
        Value::Object(mut map) => map
            .remove("value")
            .ok_or_else(|| D::Error::custom(format!("{} object has no `value` field", T::KIND)))?,
        other => other,
    };
    let tag = match tag {
        Value::String(s) if T::CASE_INSENSITIVE => Value::String(s.to_lowercase()),
        other => other,
    };

    T::deserialize(tag).map_err(|err| D::Error::custom(format!("invalid {}: {err}", T::KIND)))
}

/// Implements `as_str`, `Display`, `all` and [`CategoryTag`] for a
/// snake_case tag enum.
macro_rules! tag_enum {
    (@impl $name:ident, $kind:literal, $ci:literal { $($variant:ident => $tag:literal),+ }) => {
        impl $name {
            /// Returns every variant in canonical order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the snake_case tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl CategoryTag for $name {
            const KIND: &'static str = $kind;
            const CASE_INSENSITIVE: bool = $ci;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
    ($name:ident, $kind:literal, case_insensitive { $($variant:ident => $tag:literal),+ $(,)? }) => {
        tag_enum!(@impl $name, $kind, true { $($variant => $tag),+ });
    };
    ($name:ident, $kind:literal { $($variant:ident => $tag:literal),+ $(,)? }) => {
        tag_enum!(@impl $name, $kind, false { $($variant => $tag),+ });
    };
}

/// Types of customer jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Functional,
    Social,
    Emotional,
}

tag_enum!(JobCategory, "job category" {
    Functional => "functional",
    Social => "social",
    Emotional => "emotional",
});

/// How often a pain occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainFrequency {
    #[serde(alias = "rare")]
    Rarely,
    Sometimes,
    Often,
    Always,
}

// Frequencies arrive in free-form case ("Often", "ALWAYS").
tag_enum!(PainFrequency, "pain frequency", case_insensitive {
    Rarely => "rarely",
    Sometimes => "sometimes",
    Often => "often",
    Always => "always",
});

impl PainFrequency {
    /// Often or always.
    pub fn is_frequent(&self) -> bool {
        matches!(self, PainFrequency::Often | PainFrequency::Always)
    }
}

/// Types of customer gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainCategory {
    Required,
    Expected,
    Desired,
    Unexpected,
}

tag_enum!(GainCategory, "gain category" {
    Required => "required",
    Expected => "expected",
    Desired => "desired",
    Unexpected => "unexpected",
});

impl GainCategory {
    /// Required and expected gains are table stakes.
    pub fn is_table_stakes(&self) -> bool {
        matches!(self, GainCategory::Required | GainCategory::Expected)
    }
}

/// Customer journey phases a channel can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPhase {
    Awareness,
    Evaluation,
    Purchase,
    Delivery,
    #[serde(alias = "after-sales")]
    AfterSales,
}

tag_enum!(ChannelPhase, "channel phase" {
    Awareness => "awareness",
    Evaluation => "evaluation",
    Purchase => "purchase",
    Delivery => "delivery",
    AfterSales => "after_sales",
});

/// Customer segment shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    MassMarket,
    Niche,
    Segmented,
    Diversified,
    MultiSided,
}

tag_enum!(SegmentType, "segment type" {
    MassMarket => "mass_market",
    Niche => "niche",
    Segmented => "segmented",
    Diversified => "diversified",
    MultiSided => "multi_sided",
});

/// Types of customer relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    PersonalAssistance,
    DedicatedAssistance,
    SelfService,
    Automated,
    Communities,
    CoCreation,
}

tag_enum!(RelationshipType, "relationship type" {
    PersonalAssistance => "personal_assistance",
    DedicatedAssistance => "dedicated_assistance",
    SelfService => "self_service",
    Automated => "automated",
    Communities => "communities",
    CoCreation => "co_creation",
});

impl RelationshipType {
    /// Relationships that make leaving costly for the customer.
    pub fn creates_lock_in(&self) -> bool {
        matches!(self, RelationshipType::DedicatedAssistance | RelationshipType::CoCreation)
    }

    /// Relationships where customers contribute the work.
    pub fn is_community_driven(&self) -> bool {
        matches!(self, RelationshipType::Communities | RelationshipType::CoCreation)
    }

    /// Relationships that scale without staff.
    pub fn is_automated(&self) -> bool {
        matches!(self, RelationshipType::Automated | RelationshipType::SelfService)
    }
}

/// Types of revenue streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueType {
    AssetSale,
    UsageFee,
    Subscription,
    Lending,
    Licensing,
    Brokerage,
    Advertising,
}

tag_enum!(RevenueType, "revenue type" {
    AssetSale => "asset_sale",
    UsageFee => "usage_fee",
    Subscription => "subscription",
    Lending => "lending",
    Licensing => "licensing",
    Brokerage => "brokerage",
    Advertising => "advertising",
});

impl RevenueType {
    /// Revenue collected before the value is consumed.
    pub fn is_prepaid(&self) -> bool {
        matches!(self, RevenueType::Subscription | RevenueType::Licensing)
    }
}

/// Pricing mechanisms for revenue streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMechanism {
    Fixed,
    Dynamic,
    Auction,
    MarketDependent,
    VolumeDependent,
    Negotiation,
}

tag_enum!(PricingMechanism, "pricing mechanism" {
    Fixed => "fixed",
    Dynamic => "dynamic",
    Auction => "auction",
    MarketDependent => "market_dependent",
    VolumeDependent => "volume_dependent",
    Negotiation => "negotiation",
});

/// Types of key resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Physical,
    Intellectual,
    Human,
    Financial,
}

tag_enum!(ResourceType, "resource type" {
    Physical => "physical",
    Intellectual => "intellectual",
    Human => "human",
    Financial => "financial",
});

/// Types of key activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Production,
    ProblemSolving,
    Platform,
}

tag_enum!(ActivityType, "activity type" {
    Production => "production",
    ProblemSolving => "problem_solving",
    Platform => "platform",
});

/// Types of key partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnershipType {
    StrategicAlliance,
    Coopetition,
    JointVenture,
    BuyerSupplier,
}

tag_enum!(PartnershipType, "partnership type" {
    StrategicAlliance => "strategic_alliance",
    Coopetition => "coopetition",
    JointVenture => "joint_venture",
    BuyerSupplier => "buyer_supplier",
});

impl PartnershipType {
    /// Alliances and joint ventures raise barriers to entry.
    pub fn is_strategic(&self) -> bool {
        matches!(self, PartnershipType::StrategicAlliance | PartnershipType::JointVenture)
    }
}

/// Fixed or variable costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Fixed,
    Variable,
}

tag_enum!(CostType, "cost type" {
    Fixed => "fixed",
    Variable => "variable",
});
