pub mod json;
pub mod md;

use crate::error::ScorecardError;
use crate::types::report::ScorecardReport;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl FromStr for OutputFormat {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Md),
            other => Err(ScorecardError::ConfigParse(format!(
                "unsupported report.format: {other}"
            ))),
        }
    }
}

/// Presentation knobs resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub progress_width: usize,
    pub show_observations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            progress_width: 20,
            show_observations: true,
        }
    }
}

pub fn render(
    report: &ScorecardReport,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, options)),
    }
}
