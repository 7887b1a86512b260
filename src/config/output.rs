//! Output and analysis defaults

use serde::Deserialize;

use crate::application::AnalysisDepth;

/// How results are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

/// Analysis defaults. None of these affect scores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Depth used by `fit` when none is given on the command line
    #[serde(default)]
    pub default_depth: AnalysisDepth,
}
