use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("invalid rating for {key}: {value} (allowed: 1, 3, 5)")]
    InvalidRating { key: String, value: String },

    #[error("total out of range: {0} (allowed: 0..=50)")]
    InvalidTotal(u32),

    #[error("invalid assignment: {0} (expected <criterion>=<1|3|5>)")]
    InvalidAssignment(String),

    #[error("{0} (type `help` for commands)")]
    InvalidCommand(String),

    #[error("questionnaire incomplete, unanswered: {0}")]
    Incomplete(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
