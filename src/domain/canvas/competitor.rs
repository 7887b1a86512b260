//! Simplified competitor summaries used for competitive comparison.

use serde::{Deserialize, Serialize};

/// A competitor described only by the pains it relieves and the gains it
/// creates, as flat text lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorSummary {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default, alias = "pain_reliever_texts")]
    pub pain_relievers: Vec<String>,
    #[serde(default, alias = "gain_creator_texts")]
    pub gain_creators: Vec<String>,
}

fn default_name() -> String {
    "Competitor".to_string()
}

impl CompetitorSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pain_relievers: Vec::new(),
            gain_creators: Vec::new(),
        }
    }

    /// Builder: add reliever texts.
    pub fn relieving<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pain_relievers.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Builder: add creator texts.
    pub fn creating<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gain_creators.extend(texts.into_iter().map(Into::into));
        self
    }
}
