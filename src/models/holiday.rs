//! Declared holidays for the reporting month.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of day numbers declared as holidays.
///
/// Range checking against the month is the job of whatever produced the
/// set (see [`crate::calculation::HolidayProvider`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet(BTreeSet<u32>);

impl HolidaySet {
    /// An empty holiday set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the day is a declared holiday.
    pub fn contains(&self, day: u32) -> bool {
        self.0.contains(&day)
    }

    /// Number of declared holidays.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no holidays were declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the holiday days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
