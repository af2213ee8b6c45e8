use crate::analyze::Tier;
use crate::types::rating::{Criterion, Section};
use crate::types::scoring::{Ratings, Score};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SectionScore {
    pub id: Section,
    pub number: u8,
    pub title: String,
    pub total: Score,
    pub max: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub label: String,
    pub color: String,
    pub action: String,
    pub observations: Vec<String>,
}

impl Recommendation {
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
            color: tier.color().to_string(),
            action: tier.action().to_string(),
            observations: tier
                .observations()
                .iter()
                .map(|point| point.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardReport {
    pub version: String,
    pub generated_at: String,
    pub ratings: Ratings,
    pub sections: Vec<SectionScore>,
    pub total: Score,
    pub max_total: Score,
    pub progress: f64,
    pub answered: usize,
    pub unanswered: Vec<Criterion>,
    pub recommendation: Recommendation,
    pub note: String,
}

impl ScorecardReport {
    pub fn is_complete(&self) -> bool {
        self.unanswered.is_empty()
    }
}
