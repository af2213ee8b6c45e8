pub mod sections;
pub mod tier;

use crate::catalog;
use crate::types::rating::Section;
use crate::types::report::{Recommendation, ScorecardReport, SectionScore};
use crate::types::scoring::Ratings;
use chrono::Utc;

pub use sections::{grand_total, progress_fraction, section_total, MAX_TOTAL};
pub use tier::{classify, classify_checked, Tier};

/// Derives every presentation value from one snapshot. Nothing is cached;
/// callers re-run this after each mutation.
pub fn evaluate(ratings: &Ratings) -> ScorecardReport {
    let sections = Section::ALL
        .iter()
        .map(|section| SectionScore {
            id: *section,
            number: section.number(),
            title: catalog::section(*section).title.to_string(),
            total: section_total(ratings, *section),
            max: section.max_points(),
        })
        .collect::<Vec<_>>();

    let total = grand_total(ratings);
    let tier = classify(total);
    tracing::debug!(total, tier = ?tier, answered = ratings.answered(), "scorecard evaluated");

    ScorecardReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        ratings: *ratings,
        sections,
        total,
        max_total: MAX_TOTAL,
        progress: progress_fraction(ratings),
        answered: ratings.answered(),
        unanswered: ratings.unanswered(),
        recommendation: Recommendation::for_tier(tier),
        note: catalog::CLOSING_NOTE.to_string(),
    }
}
