//! Command line entry point.
//!
//! Usage:
//!   strategy-canvas validate --kind value|model <FILE> [--value-document FILE]
//!   strategy-canvas fit <VALUE_FILE> [--model FILE] [--depth quick|detailed]
//!   strategy-canvas compare <VALUE_FILE> <COMPETITORS_FILE> --company NAME
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use strategy_canvas::adapters::{load_document, JsonCanvasParser, LoadError};
use strategy_canvas::application::{
    AnalysisDepth, AnalyzeFitCommand, AnalyzeFitError, AnalyzeFitHandler, CanvasKind,
    CompareCompetitorsCommand, CompareCompetitorsError, CompareCompetitorsHandler,
    ValidateCanvasCommand, ValidateCanvasError, ValidateCanvasHandler,
};
use strategy_canvas::config::{init_tracing, AppConfig, ConfigError};
use strategy_canvas::ports::CanvasParser;

#[derive(Parser, Debug)]
#[command(name = "strategy-canvas", version)]
#[command(about = "Score, validate and cross-check value and business model canvases", long_about = None)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "STRATEGY_CANVAS_CONFIG")]
    config: Option<PathBuf>,

    /// Print compact JSON regardless of configuration
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and score one canvas
    Validate {
        /// Canvas type
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Canvas file
        file: PathBuf,

        /// Value document to check a business model's alignment against
        #[arg(long)]
        value_document: Option<PathBuf>,
    },

    /// Analyze fit of a value document, optionally against a business model
    Fit {
        /// Value document file
        value_document: PathBuf,

        /// Business model file
        #[arg(long)]
        model: Option<PathBuf>,

        /// Analysis depth (defaults to the configured depth)
        #[arg(long, value_enum)]
        depth: Option<DepthArg>,
    },

    /// Compare a value document against competitor summaries
    Compare {
        /// Value document file
        value_document: PathBuf,

        /// Competitor summaries file
        competitors: PathBuf,

        /// Company name used in the positioning statement
        #[arg(long)]
        company: String,

        /// Free-text market description echoed in the result
        #[arg(long)]
        market_context: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Value,
    Model,
}

impl From<KindArg> for CanvasKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Value => CanvasKind::ValueDocument,
            KindArg::Model => CanvasKind::BusinessModel,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DepthArg {
    Quick,
    Detailed,
}

impl From<DepthArg> for AnalysisDepth {
    fn from(depth: DepthArg) -> Self {
        match depth {
            DepthArg::Quick => AnalysisDepth::Quick,
            DepthArg::Detailed => AnalysisDepth::Detailed,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validate(#[from] ValidateCanvasError),

    #[error(transparent)]
    Fit(#[from] AnalyzeFitError),

    #[error(transparent)]
    Compare(#[from] CompareCompetitorsError),

    #[error("Cannot write result: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    let pretty = config.output.pretty && !cli.compact;
    let parser: Arc<dyn CanvasParser> = Arc::new(JsonCanvasParser::new());

    match cli.command {
        Command::Validate {
            kind,
            file,
            value_document,
        } => {
            let result = ValidateCanvasHandler::new(parser).handle(ValidateCanvasCommand {
                kind: kind.into(),
                canvas: load_document(&file)?,
                value_document: load_optional(value_document.as_deref())?,
            })?;
            print_json(&result, pretty)
        }
        Command::Fit {
            value_document,
            model,
            depth,
        } => {
            let result = AnalyzeFitHandler::new(parser).handle(AnalyzeFitCommand {
                value_document: load_document(&value_document)?,
                business_model: load_optional(model.as_deref())?,
                depth: depth.map_or(config.analysis.default_depth, AnalysisDepth::from),
            })?;
            print_json(&result, pretty)
        }
        Command::Compare {
            value_document,
            competitors,
            company,
            market_context,
        } => {
            let result = CompareCompetitorsHandler::new(parser).handle(CompareCompetitorsCommand {
                company_name: company,
                value_document: load_document(&value_document)?,
                competitors: load_document(&competitors)?,
                market_context,
            })?;
            print_json(&result, pretty)
        }
    }
}

fn load_optional(path: Option<&Path>) -> Result<Option<Value>, LoadError> {
    path.map(load_document).transpose()
}

fn print_json<T: Serialize>(result: &T, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}
