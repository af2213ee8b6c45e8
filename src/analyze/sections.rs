use crate::types::rating::Section;
use crate::types::scoring::{Ratings, Score};

pub const MAX_TOTAL: Score = 50;

pub fn section_total(ratings: &Ratings, section: Section) -> Score {
    section
        .criteria()
        .iter()
        .map(|criterion| ratings.points(*criterion))
        .sum()
}

pub fn grand_total(ratings: &Ratings) -> Score {
    Section::ALL
        .iter()
        .map(|section| section_total(ratings, *section))
        .sum()
}

/// Share of the maximum reached, in `0.0..=1.0`.
pub fn progress_fraction(ratings: &Ratings) -> f64 {
    f64::from(grand_total(ratings)) / f64::from(MAX_TOTAL)
}
