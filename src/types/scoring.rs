use crate::types::rating::{Criterion, RatingValue};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub type Score = u32;

/// Immutable view of all ten ratings. `None` means not yet answered and
/// contributes nothing to any sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratings {
    slots: [Option<RatingValue>; Criterion::COUNT],
}

impl Ratings {
    pub fn get(&self, criterion: Criterion) -> Option<RatingValue> {
        self.slots[criterion.index()]
    }

    /// Points held by a slot, 0 while unanswered.
    pub fn points(&self, criterion: Criterion) -> Score {
        self.get(criterion).map_or(0, RatingValue::points)
    }

    pub fn with(mut self, criterion: Criterion, value: RatingValue) -> Self {
        self.slots[criterion.index()] = Some(value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, Option<RatingValue>)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, self.get(criterion)))
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn unanswered(&self) -> Vec<Criterion> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(criterion, _)| criterion)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == Criterion::COUNT
    }
}

impl Serialize for Ratings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Criterion::COUNT))?;
        for (criterion, value) in self.iter() {
            map.serialize_entry(&criterion, &value)?;
        }
        map.end()
    }
}
