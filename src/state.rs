use crate::error::{Result, ScorecardError};
use crate::types::rating::{parse_rating, Criterion, RatingValue};
use crate::types::scoring::Ratings;

/// Owns the ratings for one session. Every mutation replaces the whole
/// snapshot, so readers never observe a half-applied update.
#[derive(Debug, Clone, Default)]
pub struct Scorecard {
    current: Ratings,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Ratings {
        self.current
    }

    pub fn set_rating(&mut self, criterion: Criterion, value: RatingValue) -> Ratings {
        self.current = self.current.with(criterion, value);
        tracing::debug!(criterion = criterion.key(), value = value.points(), "rating set");
        self.current
    }
}

/// Parses a `<criterion>=<value>` assignment.
pub fn parse_assignment(raw: &str) -> Result<(Criterion, RatingValue)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ScorecardError::InvalidAssignment(raw.to_string()))?;
    let criterion: Criterion = key.parse()?;
    let rating = parse_rating(criterion, value)?;
    Ok((criterion, rating))
}

/// Builds a session from assignments applied in order.
pub fn from_assignments<'a>(assignments: impl IntoIterator<Item = &'a str>) -> Result<Scorecard> {
    let mut card = Scorecard::new();
    for raw in assignments {
        let (criterion, value) = parse_assignment(raw)?;
        card.set_rating(criterion, value);
    }
    Ok(card)
}
