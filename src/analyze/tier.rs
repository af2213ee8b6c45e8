use crate::error::{Result, ScorecardError};
use crate::types::scoring::Score;
use serde::Serialize;

use super::sections::MAX_TOTAL;

/// Totals strictly above this land in the top tier.
pub const HIGH_NEED_ABOVE: Score = 35;
/// Lowest total that still counts as an emerging need.
pub const EMERGING_NEED_FROM: Score = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    HighImmediateNeed,
    EmergingNeed,
    NotRecommended,
}

/// Predicate order is significant: 35 itself must fall through to the
/// emerging tier.
pub fn classify(total: Score) -> Tier {
    if total > HIGH_NEED_ABOVE {
        Tier::HighImmediateNeed
    } else if total >= EMERGING_NEED_FROM {
        Tier::EmergingNeed
    } else {
        Tier::NotRecommended
    }
}

/// Classifies a total typed by a caller, rejecting anything a snapshot
/// could never produce.
pub fn classify_checked(total: u32) -> Result<Tier> {
    if total > MAX_TOTAL {
        return Err(ScorecardError::InvalidTotal(total));
    }
    Ok(classify(total))
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Self::HighImmediateNeed => "Strong and immediate need",
            Self::EmergingNeed => "Emerging need",
            Self::NotRecommended => "Hiring not recommended",
        }
    }

    /// Presentation color tag.
    pub fn color(self) -> &'static str {
        match self {
            Self::HighImmediateNeed => "green",
            Self::EmergingNeed => "yellow",
            Self::NotRecommended => "red",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Self::HighImmediateNeed => {
                "Start the hiring process, beginning with strong alignment of the executive committee."
            }
            Self::EmergingNeed => {
                "It is time to plan. Define the future CRO mandate, strengthen your processes and data, and put CRO hiring on your roadmap within 6-12 months."
            }
            Self::NotRecommended => {
                "Focus on the execution quality of each team and on hiring strong functional leaders (e.g. an excellent VP of Sales) to build robust, repeatable processes within each department."
            }
        }
    }

    pub fn observations(self) -> &'static [&'static str] {
        match self {
            Self::HighImmediateNeed => &[
                "High complexity and maturity",
                "Silos are holding back growth",
                "Fertile ground for a transformational CRO",
            ],
            Self::EmergingNeed => &[
                "Growing pains are being felt",
                "Processes are starting to crack",
                "Cross-team collaboration is difficult",
            ],
            Self::NotRecommended => &[
                "Organization is not complex enough yet",
                "Challenges lie in functional execution",
                "Alignment issues are not critical",
            ],
        }
    }
}
