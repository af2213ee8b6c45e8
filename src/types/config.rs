use crate::error::ScorecardError;
use crate::report::{OutputFormat, RenderOptions};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const MIN_PROGRESS_WIDTH: usize = 5;
pub const MAX_PROGRESS_WIDTH: usize = 80;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorecardConfig {
    pub report: Option<ReportConfig>,
    pub session: Option<SessionConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub progress_width: Option<usize>,
    pub show_observations: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub require_complete: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ScorecardConfig {
    pub fn output_format(&self) -> Result<OutputFormat, ScorecardError> {
        match self.report.as_ref().and_then(|report| report.format.as_deref()) {
            Some(name) => name.parse(),
            None => Ok(OutputFormat::Md),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        match &self.report {
            Some(report) => RenderOptions {
                progress_width: report.progress_width.unwrap_or(defaults.progress_width),
                show_observations: report
                    .show_observations
                    .unwrap_or(defaults.show_observations),
            },
            None => defaults,
        }
    }

    pub fn require_complete(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.require_complete)
    }

    pub fn log_level(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.clone())
            .unwrap_or_else(default_log_level)
    }

    pub fn validate(&self) -> Result<(), ScorecardError> {
        self.output_format()?;

        let width = self.render_options().progress_width;
        if !(MIN_PROGRESS_WIDTH..=MAX_PROGRESS_WIDTH).contains(&width) {
            return Err(ScorecardError::ConfigParse(format!(
                "report.progress_width must be between {MIN_PROGRESS_WIDTH} and {MAX_PROGRESS_WIDTH}, got {width}"
            )));
        }

        let level = self.log_level();
        if EnvFilter::try_new(&level).is_err() {
            return Err(ScorecardError::ConfigParse(format!(
                "invalid logging.level: {level}"
            )));
        }

        Ok(())
    }
}
