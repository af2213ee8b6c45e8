use crate::error::{Result, ScorecardError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the three answer choices a criterion accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum RatingValue {
    Low,
    Medium,
    High,
}

impl RatingValue {
    pub const ALL: [RatingValue; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn points(self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> Self {
        match value {
            RatingValue::Low => 1,
            RatingValue::Medium => 3,
            RatingValue::High => 5,
        }
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            3 => Ok(Self::Medium),
            5 => Ok(Self::High),
            other => Err(other),
        }
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// The three fixed, non-overlapping groups of criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    GrowthComplexity,
    ProcessMaturity,
    OrganizationalAlignment,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Self::GrowthComplexity,
        Self::ProcessMaturity,
        Self::OrganizationalAlignment,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::GrowthComplexity => 1,
            Self::ProcessMaturity => 2,
            Self::OrganizationalAlignment => 3,
        }
    }

    pub fn criteria(self) -> &'static [Criterion] {
        match self {
            Self::GrowthComplexity => &[
                Criterion::TeamSize,
                Criterion::MarketComplexity,
                Criterion::RevenueStage,
                Criterion::GrowthVelocity,
            ],
            Self::ProcessMaturity => &[
                Criterion::DataReliability,
                Criterion::ProcessDefinition,
                Criterion::ForecastAccuracy,
            ],
            Self::OrganizationalAlignment => &[
                Criterion::InterTeamFriction,
                Criterion::SharedKpis,
                Criterion::ExecutiveCommitment,
            ],
        }
    }

    /// Highest subtotal the section can reach: every criterion rated High.
    pub fn max_points(self) -> u32 {
        self.criteria().len() as u32 * RatingValue::High.points()
    }
}

/// The ten rated criteria, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    TeamSize,
    MarketComplexity,
    RevenueStage,
    GrowthVelocity,
    DataReliability,
    ProcessDefinition,
    ForecastAccuracy,
    InterTeamFriction,
    SharedKpis,
    ExecutiveCommitment,
}

impl Criterion {
    pub const COUNT: usize = 10;

    pub const ALL: [Criterion; Self::COUNT] = [
        Self::TeamSize,
        Self::MarketComplexity,
        Self::RevenueStage,
        Self::GrowthVelocity,
        Self::DataReliability,
        Self::ProcessDefinition,
        Self::ForecastAccuracy,
        Self::InterTeamFriction,
        Self::SharedKpis,
        Self::ExecutiveCommitment,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TeamSize => "team-size",
            Self::MarketComplexity => "market-complexity",
            Self::RevenueStage => "revenue-stage",
            Self::GrowthVelocity => "growth-velocity",
            Self::DataReliability => "data-reliability",
            Self::ProcessDefinition => "process-definition",
            Self::ForecastAccuracy => "forecast-accuracy",
            Self::InterTeamFriction => "inter-team-friction",
            Self::SharedKpis => "shared-kpis",
            Self::ExecutiveCommitment => "executive-commitment",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Self::TeamSize | Self::MarketComplexity | Self::RevenueStage | Self::GrowthVelocity => {
                Section::GrowthComplexity
            }
            Self::DataReliability | Self::ProcessDefinition | Self::ForecastAccuracy => {
                Section::ProcessMaturity
            }
            Self::InterTeamFriction | Self::SharedKpis | Self::ExecutiveCommitment => {
                Section::OrganizationalAlignment
            }
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// Accepts kebab-case, snake_case and camelCase spellings of the key.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Criterion {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|criterion| normalize_key(criterion.key()) == wanted)
            .ok_or_else(|| ScorecardError::UnknownCriterion(s.trim().to_string()))
    }
}

/// Parses a rating typed for `criterion`; anything but 1, 3 or 5 is rejected.
pub fn parse_rating(criterion: Criterion, raw: &str) -> Result<RatingValue> {
    let invalid = || ScorecardError::InvalidRating {
        key: criterion.key().to_string(),
        value: raw.trim().to_string(),
    };
    let number: u8 = raw.trim().parse().map_err(|_| invalid())?;
    RatingValue::try_from(number).map_err(|_| invalid())
}
