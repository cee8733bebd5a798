//! Holiday providers.
//!
//! A provider turns some outside source (a list, typed text, nothing at all)
//! into the [`HolidaySet`] for the reporting month. Providers own range
//! checking: days outside `1..=days_in_month` never reach the classifier.

use tracing::warn;

use crate::models::{HolidaySet, MonthContext};

/// Resolves the declared holidays for a reporting month.
pub trait HolidayProvider {
    /// Returns the holidays for `month`, every day within range.
    fn resolve_holidays(&self, month: &MonthContext) -> HolidaySet;
}

/// A provider that declares no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn resolve_holidays(&self, _month: &MonthContext) -> HolidaySet {
        HolidaySet::empty()
    }
}

/// A fixed list of day numbers.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{FixedHolidays, HolidayProvider};
/// use attendance_engine::models::MonthContext;
///
/// let month = MonthContext::new(2024, 4).unwrap();
/// let holidays = FixedHolidays(vec![1, 31, 0, 15]).resolve_holidays(&month);
/// assert_eq!(holidays.iter().collect::<Vec<_>>(), vec![1, 15]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidays(pub Vec<u32>);

impl HolidayProvider for FixedHolidays {
    fn resolve_holidays(&self, month: &MonthContext) -> HolidaySet {
        self.0
            .iter()
            .copied()
            .filter(|day| {
                let valid = month.contains_day(*day);
                if !valid {
                    warn!(
                        day,
                        days_in_month = month.days_in_month,
                        "Rejecting out-of-range holiday"
                    );
                }
                valid
            })
            .collect()
    }
}

/// Comma-separated holiday text as typed by a person, e.g. `"1,15,28"`.
///
/// Tokens are trimmed; anything that is not a plain run of digits, and any
/// day outside the month, is dropped. Blank text means no holidays.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{HolidayProvider, HolidayText};
/// use attendance_engine::models::MonthContext;
///
/// let month = MonthContext::new(2024, 2).unwrap();
/// let holidays = HolidayText::new(" 1, 15 ,x,30,-2, 29").resolve_holidays(&month);
/// assert_eq!(holidays.iter().collect::<Vec<_>>(), vec![1, 15, 29]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayText(pub String);

impl HolidayText {
    /// Wraps the raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    fn days(&self) -> Vec<u32> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|token| token.parse().ok())
            .collect()
    }
}

impl HolidayProvider for HolidayText {
    fn resolve_holidays(&self, month: &MonthContext) -> HolidaySet {
        FixedHolidays(self.days()).resolve_holidays(month)
    }
}
