//! End-to-end canvas workflows: load fixture files, run each handler and
//! check the keyed results.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};
use strategy_canvas::adapters::{load_document, JsonCanvasParser};
use strategy_canvas::application::{
    AnalysisDepth, AnalyzeFitCommand, AnalyzeFitHandler, CanvasKind, CompareCompetitorsCommand,
    CompareCompetitorsHandler, ValidateCanvasCommand, ValidateCanvasHandler,
};
use strategy_canvas::domain::analysis::AlignmentOutcome;
use strategy_canvas::ports::CanvasParser;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_document(path).unwrap()
}

fn parser() -> Arc<dyn CanvasParser> {
    Arc::new(JsonCanvasParser::new())
}

fn minimal_value_document() -> Value {
    json!({
        "company_name": "TestCo",
        "target_segment": "Remote team managers",
        "jobs": [{"description": "Coordinate team tasks", "category": "functional", "importance": 5}],
        "pains": [{"description": "Tasks fall through", "intensity": 5, "frequency": "often"}],
        "gains": [{"description": "Clear visibility", "category": "required", "relevance": 4}],
        "offerings": [{"name": "TaskSync", "description": "Task coordination", "importance": 5}],
        "pain_relievers": [
            {"description": "Flags at-risk tasks", "target_pain": "Tasks fall through", "effectiveness": 5}
        ],
        "gain_creators": [
            {"description": "Workload dashboard", "target_gain": "Clear visibility", "effectiveness": 4}
        ]
    })
}

#[test]
fn single_linked_pain_is_fully_covered() {
    let result = AnalyzeFitHandler::new(parser())
        .handle(AnalyzeFitCommand {
            value_document: minimal_value_document(),
            business_model: None,
            depth: AnalysisDepth::Quick,
        })
        .unwrap();

    assert_eq!(result.fit.pain_coverage, 100.0);
    assert!(result.fit.problem_solution_fit > 0.0);
}

#[test]
fn subscription_model_scores_recurring_revenue() {
    let result = ValidateCanvasHandler::new(parser())
        .handle(ValidateCanvasCommand {
            kind: CanvasKind::BusinessModel,
            canvas: fixture("business_model.json"),
            value_document: None,
        })
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    let recurring = json["quality_score"]["recurring_revenues"].as_f64().unwrap();
    assert!(recurring >= 3.0);
    assert_eq!(recurring, 3.5);
}

#[test]
fn model_without_after_sales_reports_missing_phase() {
    let result = ValidateCanvasHandler::new(parser())
        .handle(ValidateCanvasCommand {
            kind: CanvasKind::BusinessModel,
            canvas: fixture("business_model.json"),
            value_document: None,
        })
        .unwrap();

    assert!(result.gap_analysis.iter().any(|gap| gap.contains("after_sales")));
}

#[test]
fn close_competitor_is_a_threat_and_unique_reliever_a_strength() {
    let result = CompareCompetitorsHandler::new(parser())
        .handle(CompareCompetitorsCommand {
            company_name: "TestCo".to_string(),
            value_document: fixture("value_document.json"),
            competitors: fixture("competitors.json"),
            market_context: None,
        })
        .unwrap();

    assert_eq!(result.competitors_analyzed, 2);
    assert_eq!(result.analysis.threats, vec!["Asana: High overlap (4 areas)"]);
    assert!(result.analysis.strengths[0].contains("status updates take too long"));
}

#[test]
fn value_document_file_validates_cleanly() {
    let result = ValidateCanvasHandler::new(parser())
        .handle(ValidateCanvasCommand {
            kind: CanvasKind::ValueDocument,
            canvas: fixture("value_document.json"),
            value_document: None,
        })
        .unwrap();

    assert!(result.validation.is_valid);
    assert!(result.validation.errors.is_empty());
    assert!(result.gap_analysis.is_empty());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["canvas_type"], "value_document");
    assert_eq!(json["quality_score"]["max"], 50.0);
}

#[test]
fn alignment_across_both_files() {
    let result = AnalyzeFitHandler::new(parser())
        .handle(AnalyzeFitCommand {
            value_document: fixture("value_document.json"),
            business_model: Some(fixture("business_model.json")),
            depth: AnalysisDepth::Detailed,
        })
        .unwrap();

    let alignment = result
        .alignment
        .as_ref()
        .and_then(AlignmentOutcome::result)
        .unwrap();
    assert_eq!(alignment.fit_score, 80.0);
    assert!(alignment
        .strengths
        .contains(&"Target segment aligns with business model customer segments".to_string()));
    assert!(result.interpretation.is_some());
}

#[test]
fn unreadable_value_document_degrades_alignment_only() {
    let result = ValidateCanvasHandler::new(parser())
        .handle(ValidateCanvasCommand {
            kind: CanvasKind::BusinessModel,
            canvas: fixture("business_model.json"),
            value_document: Some(json!({"company_name": "TestCo"})),
        })
        .unwrap();

    assert!(result.validation.is_valid);
    assert!(result.quality_score.is_some());
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["alignment"]["error"]
        .as_str()
        .unwrap()
        .starts_with("Could not analyze alignment: "));
}

#[test]
fn identical_input_yields_identical_output() {
    let handler = ValidateCanvasHandler::new(parser());
    let run = || {
        let result = handler
            .handle(ValidateCanvasCommand {
                kind: CanvasKind::BusinessModel,
                canvas: fixture("business_model.json"),
                value_document: Some(fixture("value_document.json")),
            })
            .unwrap();
        serde_json::to_string(&result).unwrap()
    };

    assert_eq!(run(), run());
}
