//! CompareCompetitorsHandler - Competitive analysis for a value document.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::rejected;
use crate::domain::analysis::{CompetitiveAnalysis, CompetitorAnalyzer};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::CanvasParser;

/// Command to compare a value document against competitors.
#[derive(Debug, Clone)]
pub struct CompareCompetitorsCommand {
    pub company_name: String,
    pub value_document: Value,
    /// A list of `{name, pain_relievers, gain_creators}` summaries, or an
    /// object wrapping that list under `competitors`.
    pub competitors: Value,
    pub market_context: Option<String>,
}

/// Result of competitor comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareCompetitorsResult {
    pub company_name: String,
    pub competitors_analyzed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_context: Option<String>,
    #[serde(flatten)]
    pub analysis: CompetitiveAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning_statement: Option<String>,
}

/// Errors that can occur during competitor comparison.
#[derive(Debug, Clone, Error)]
pub enum CompareCompetitorsError {
    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Handler for competitor comparison.
pub struct CompareCompetitorsHandler {
    parser: Arc<dyn CanvasParser>,
}

impl CompareCompetitorsHandler {
    pub fn new(parser: Arc<dyn CanvasParser>) -> Self {
        Self { parser }
    }

    pub fn handle(
        &self,
        cmd: CompareCompetitorsCommand,
    ) -> Result<CompareCompetitorsResult, CompareCompetitorsError> {
        let company_name = cmd.company_name.trim();
        if company_name.is_empty() {
            return Err(ValidationError::empty_field("company_name").into());
        }

        let doc = self
            .parser
            .parse_value_document(&cmd.value_document)
            .map_err(|err| rejected(ErrorCode::InvalidValueDocument, &err))?;
        let competitors = self
            .parser
            .parse_competitors(&cmd.competitors)
            .map_err(|err| rejected(ErrorCode::InvalidCompetitors, &err))?;

        debug!(
            company = company_name,
            competitors = competitors.len(),
            "Comparing against competitors"
        );

        let analysis = CompetitorAnalyzer::compare(&doc, &competitors);
        let positioning_statement = analysis.positioning_statement(company_name);

        info!(
            company = company_name,
            competitors = competitors.len(),
            threats = analysis.threats.len(),
            strengths = analysis.strengths.len(),
            "Competitors compared"
        );

        Ok(CompareCompetitorsResult {
            company_name: company_name.to_string(),
            competitors_analyzed: competitors.len(),
            market_context: cmd.market_context,
            analysis,
            positioning_statement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonCanvasParser;
    use crate::application::handlers::canvas::test_payloads::value_payload;
    use serde_json::json;

    fn handler() -> CompareCompetitorsHandler {
        CompareCompetitorsHandler::new(Arc::new(JsonCanvasParser::new()))
    }

    fn rivals() -> Value {
        json!([
            {
                "name": "Trello",
                "pain_relievers": ["Boards get cluttered"],
                "gain_creators": ["Visual planning"]
            },
            {
                "name": "Asana",
                "pain_relievers": ["Tasks fall through cracks", "Timezone coordination is hard"],
                "gain_creators": ["Clear visibility into workload", "Automated progress tracking"]
            }
        ])
    }

    fn command(competitors: Value) -> CompareCompetitorsCommand {
        CompareCompetitorsCommand {
            company_name: "TestCo".to_string(),
            value_document: value_payload(),
            competitors,
            market_context: Some("Remote work tools".to_string()),
        }
    }

    #[test]
    fn compares_against_competitors() {
        let result = handler().handle(command(rivals())).unwrap();

        assert_eq!(result.competitors_analyzed, 2);
        assert_eq!(result.analysis.threats, vec!["Asana: High overlap (4 areas)"]);
        assert!(result
            .analysis
            .strengths
            .contains(&"Unique pain relief in: status updates take too long".to_string()));
        assert_eq!(
            result.positioning_statement.as_deref(),
            Some(
                "TestCo can position around unique pain relief in: status updates take too long \
                 and unique gain creation in: real-time collaboration, with moderate defensibility."
            )
        );
    }

    #[test]
    fn result_flattens_analysis_keys() {
        let result = handler().handle(command(rivals())).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["company_name"], "TestCo");
        assert_eq!(json["market_context"], "Remote work tools");
        assert_eq!(json["copy_difficulty"], "Medium");
        assert_eq!(json["overlaps"][0]["name"], "Asana");
        assert!(json.get("analysis").is_none());
    }

    #[test]
    fn accepts_wrapped_competitor_list() {
        let result = handler()
            .handle(command(json!({"competitors": rivals()})))
            .unwrap();
        assert_eq!(result.competitors_analyzed, 2);
    }

    #[test]
    fn no_competitors_leaves_everything_unique() {
        let result = handler().handle(command(json!([]))).unwrap();

        assert_eq!(result.competitors_analyzed, 0);
        assert!(result.analysis.threats.is_empty());
        assert!(result.analysis.weaknesses.is_empty());
        assert_eq!(result.analysis.strengths.len(), 2);
    }

    #[test]
    fn blank_company_name_is_rejected() {
        let mut cmd = command(rivals());
        cmd.company_name = "   ".to_string();
        assert!(matches!(
            handler().handle(cmd),
            Err(CompareCompetitorsError::ValidationFailed(_))
        ));
    }

    #[test]
    fn malformed_competitors_are_rejected() {
        let err = handler().handle(command(json!("Asana"))).unwrap_err();
        match err {
            CompareCompetitorsError::Domain(domain) => {
                assert_eq!(domain.code, ErrorCode::InvalidCompetitors);
                assert!(domain.message.starts_with("Invalid competitor data: "));
            }
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_value_document_is_rejected() {
        let mut cmd = command(rivals());
        cmd.value_document = json!({"company_name": "TestCo", "jobs": []});
        match handler().handle(cmd).unwrap_err() {
            CompareCompetitorsError::Domain(domain) => {
                assert_eq!(domain.code, ErrorCode::InvalidValueDocument)
            }
            other => panic!("expected domain error, got {:?}", other),
        }
    }
}
