//! JSON Canvas Parser - Implementation of CanvasParser.
//!
//! Deserializes payloads with serde, then runs the structural checks that
//! serde attributes cannot express (item counts, blank text, percentages).

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::canvas::{BusinessModel, CompetitorSummary, ValueDocument};
use crate::ports::{CanvasParseError, CanvasParser};

/// serde-based canvas parser.
///
/// Stateless; `Send + Sync` and cheap to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCanvasParser;

impl JsonCanvasParser {
    pub fn new() -> Self {
        Self
    }

    fn decode<T: DeserializeOwned>(data: &Value) -> Result<T, CanvasParseError> {
        Ok(T::deserialize(data)?)
    }
}

impl CanvasParser for JsonCanvasParser {
    fn parse_value_document(&self, data: &Value) -> Result<ValueDocument, CanvasParseError> {
        let doc: ValueDocument = Self::decode(data)?;
        doc.check_structure()?;
        Ok(doc)
    }

    fn parse_business_model(&self, data: &Value) -> Result<BusinessModel, CanvasParseError> {
        let model: BusinessModel = Self::decode(data)?;
        model.check_structure()?;
        Ok(model)
    }

    fn parse_competitors(&self, data: &Value) -> Result<Vec<CompetitorSummary>, CanvasParseError> {
        match data {
            Value::Array(_) => Self::decode(data),
            // A document wrapping the list under "competitors".
            Value::Object(map) => match map.get("competitors") {
                Some(list) => Self::decode(list),
                None => Err(CanvasParseError::malformed(
                    "expected a list of competitors or an object with a `competitors` list",
                )),
            },
            _ => Err(CanvasParseError::malformed("expected a list of competitors")),
        }
    }
}
