//! Value document: customer profile (jobs, pains, gains) and value map
//! (offerings, pain relievers, gain creators).

use serde::{Deserialize, Deserializer, Serialize};

use super::categories::{tag_or_object, GainCategory, JobCategory, PainFrequency};
use super::linking::links_to;
use super::{check_count, check_text};
use crate::domain::foundation::{Rating, ValidationError};

/// A job the customer is trying to get done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerJob {
    pub description: String,
    #[serde(alias = "job_type", deserialize_with = "tag_or_object")]
    pub category: JobCategory,
    pub importance: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl CustomerJob {
    /// Creates a job; importance is clamped to 1-5.
    pub fn new(description: impl Into<String>, category: JobCategory, importance: u8) -> Self {
        Self {
            description: description.into(),
            category,
            importance: Rating::new(importance),
            context: None,
        }
    }
}

/// A pain or frustration the customer experiences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub intensity: Rating,
    #[serde(deserialize_with = "tag_or_object")]
    pub frequency: PainFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_job: Option<String>,
}

impl CustomerPain {
    /// Creates a pain; intensity is clamped to 1-5.
    pub fn new(description: impl Into<String>, intensity: u8, frequency: PainFrequency) -> Self {
        Self {
            id: None,
            description: description.into(),
            intensity: Rating::new(intensity),
            frequency,
            related_job: None,
        }
    }

    /// Builder: attach an explicit id for reference matching.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A gain or outcome the customer desires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerGain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    #[serde(alias = "gain_type", deserialize_with = "tag_or_object")]
    pub category: GainCategory,
    pub relevance: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_job: Option<String>,
}

impl CustomerGain {
    /// Creates a gain; relevance is clamped to 1-5.
    pub fn new(description: impl Into<String>, category: GainCategory, relevance: u8) -> Self {
        Self {
            id: None,
            description: description.into(),
            category,
            relevance: Rating::new(relevance),
            related_job: None,
        }
    }

    /// Builder: attach an explicit id for reference matching.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A product or service in the value map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub name: String,
    pub description: String,
    pub importance: Rating,
    #[serde(default, alias = "is_digital")]
    pub digital: bool,
    #[serde(default = "default_tangible", alias = "is_tangible")]
    pub tangible: bool,
}

fn default_tangible() -> bool {
    true
}

impl Offering {
    /// Creates a tangible, non-digital offering.
    pub fn new(name: impl Into<String>, description: impl Into<String>, importance: u8) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            importance: Rating::new(importance),
            digital: false,
            tangible: true,
        }
    }

    /// Builder: mark as digital.
    pub fn digital(mut self) -> Self {
        self.digital = true;
        self
    }

    /// Builder: mark as intangible.
    pub fn intangible(mut self) -> Self {
        self.tangible = false;
        self
    }
}

/// How the value map alleviates a customer pain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainReliever {
    pub description: String,
    #[serde(alias = "addresses_pain")]
    pub target_pain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_ref: Option<String>,
    pub effectiveness: Rating,
    #[serde(default, alias = "product_service", skip_serializing_if = "Option::is_none")]
    pub offering: Option<String>,
}

impl PainReliever {
    /// Creates a reliever targeting a pain by text.
    pub fn new(
        description: impl Into<String>,
        target_pain: impl Into<String>,
        effectiveness: u8,
    ) -> Self {
        Self {
            description: description.into(),
            target_pain: target_pain.into(),
            pain_ref: None,
            effectiveness: Rating::new(effectiveness),
            offering: None,
        }
    }

    /// Builder: target a pain by explicit id.
    pub fn with_pain_ref(mut self, id: impl Into<String>) -> Self {
        self.pain_ref = Some(id.into());
        self
    }

    /// True if this reliever addresses the given pain.
    pub fn addresses(&self, pain: &CustomerPain) -> bool {
        links_to(
            self.pain_ref.as_deref(),
            &self.target_pain,
            pain.id.as_deref(),
            &pain.description,
        )
    }
}

/// How the value map creates a customer gain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainCreator {
    pub description: String,
    #[serde(alias = "creates_gain")]
    pub target_gain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_ref: Option<String>,
    pub effectiveness: Rating,
    #[serde(default, alias = "product_service", skip_serializing_if = "Option::is_none")]
    pub offering: Option<String>,
}

impl GainCreator {
    /// Creates a creator targeting a gain by text.
    pub fn new(
        description: impl Into<String>,
        target_gain: impl Into<String>,
        effectiveness: u8,
    ) -> Self {
        Self {
            description: description.into(),
            target_gain: target_gain.into(),
            gain_ref: None,
            effectiveness: Rating::new(effectiveness),
            offering: None,
        }
    }

    /// Builder: target a gain by explicit id.
    pub fn with_gain_ref(mut self, id: impl Into<String>) -> Self {
        self.gain_ref = Some(id.into());
        self
    }

    /// True if this creator produces the given gain.
    pub fn creates(&self, gain: &CustomerGain) -> bool {
        links_to(
            self.gain_ref.as_deref(),
            &self.target_gain,
            gain.id.as_deref(),
            &gain.description,
        )
    }
}

/// The complete value document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDocument {
    pub company_name: String,
    pub target_segment: String,
    #[serde(alias = "customer_jobs")]
    pub jobs: Vec<CustomerJob>,
    #[serde(alias = "customer_pains")]
    pub pains: Vec<CustomerPain>,
    #[serde(alias = "customer_gains")]
    pub gains: Vec<CustomerGain>,
    #[serde(alias = "products_services")]
    pub offerings: Vec<Offering>,
    pub pain_relievers: Vec<PainReliever>,
    pub gain_creators: Vec<GainCreator>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub competitors: Vec<String>,
}

/// Treats an explicit `null` list like a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ValueDocument {
    /// Creates an empty document. Use the `with_*` builders to populate it.
    pub fn new(company_name: impl Into<String>, target_segment: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            target_segment: target_segment.into(),
            jobs: Vec::new(),
            pains: Vec::new(),
            gains: Vec::new(),
            offerings: Vec::new(),
            pain_relievers: Vec::new(),
            gain_creators: Vec::new(),
            competitors: Vec::new(),
        }
    }

    pub fn with_job(mut self, job: CustomerJob) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_pain(mut self, pain: CustomerPain) -> Self {
        self.pains.push(pain);
        self
    }

    pub fn with_gain(mut self, gain: CustomerGain) -> Self {
        self.gains.push(gain);
        self
    }

    pub fn with_offering(mut self, offering: Offering) -> Self {
        self.offerings.push(offering);
        self
    }

    pub fn with_pain_reliever(mut self, reliever: PainReliever) -> Self {
        self.pain_relievers.push(reliever);
        self
    }

    pub fn with_gain_creator(mut self, creator: GainCreator) -> Self {
        self.gain_creators.push(creator);
        self
    }

    pub fn with_competitor(mut self, name: impl Into<String>) -> Self {
        self.competitors.push(name.into());
        self
    }

    /// True if at least one reliever addresses the pain.
    pub fn is_pain_relieved(&self, pain: &CustomerPain) -> bool {
        self.pain_relievers.iter().any(|r| r.addresses(pain))
    }

    /// True if at least one creator produces the gain.
    pub fn is_gain_created(&self, gain: &CustomerGain) -> bool {
        self.gain_creators.iter().any(|c| c.creates(gain))
    }

    /// Structural checks performed once at record construction.
    ///
    /// Every collection holds 1-10 items and descriptive text is non-blank.
    /// Ratings are range-checked by [`Rating`] during deserialization.
    pub fn check_structure(&self) -> Result<(), ValidationError> {
        check_text("company_name", &self.company_name)?;
        check_text("target_segment", &self.target_segment)?;

        check_count("jobs", self.jobs.len())?;
        check_count("pains", self.pains.len())?;
        check_count("gains", self.gains.len())?;
        check_count("offerings", self.offerings.len())?;
        check_count("pain_relievers", self.pain_relievers.len())?;
        check_count("gain_creators", self.gain_creators.len())?;

        for job in &self.jobs {
            check_text("jobs.description", &job.description)?;
        }
        for pain in &self.pains {
            check_text("pains.description", &pain.description)?;
        }
        for gain in &self.gains {
            check_text("gains.description", &gain.description)?;
        }
        for offering in &self.offerings {
            check_text("offerings.name", &offering.name)?;
        }
        for reliever in &self.pain_relievers {
            check_text("pain_relievers.target_pain", &reliever.target_pain)?;
        }
        for creator in &self.gain_creators {
            check_text("gain_creators.target_gain", &creator.target_gain)?;
        }
        Ok(())
    }
}
