//! Calendar facts for the reporting month.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The reporting month and its calendar facts.
///
/// Derived once per run. `weekdays[d - 1]` is the weekday of day `d`, and
/// `sundays` holds exactly the days whose weekday is Sunday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MonthContext;
/// use chrono::Weekday;
///
/// let month = MonthContext::new(2024, 2).unwrap();
/// assert_eq!(month.days_in_month, 29);
/// assert_eq!(month.weekday_of(1), Some(Weekday::Thu));
/// assert!(month.is_sunday(4));
/// assert_eq!(month.label(), "February-2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthContext {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Number of days in the month (leap years included).
    pub days_in_month: u32,
    /// Weekday of each day, indexed by `day - 1`.
    pub weekdays: Vec<Weekday>,
    /// Day numbers that fall on a Sunday.
    pub sundays: BTreeSet<u32>,
}

impl MonthContext {
    /// Builds the context for a year and month.
    ///
    /// Returns `None` if the month is out of range or the year is outside
    /// the supported calendar.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let days_in_month = next.signed_duration_since(first).num_days() as u32;

        let weekdays: Vec<Weekday> = (0..days_in_month)
            .map(|offset| (first + Duration::days(i64::from(offset))).weekday())
            .collect();

        let sundays = weekdays
            .iter()
            .enumerate()
            .filter(|(_, weekday)| **weekday == Weekday::Sun)
            .map(|(idx, _)| idx as u32 + 1)
            .collect();

        Some(Self {
            year,
            month,
            days_in_month,
            weekdays,
            sundays,
        })
    }

    /// Iterates the day numbers of the month, 1 through `days_in_month`.
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month
    }

    /// Returns true if `day` is a valid day of this month.
    pub fn contains_day(&self, day: u32) -> bool {
        (1..=self.days_in_month).contains(&day)
    }

    /// Weekday of the given day, or `None` if the day is out of range.
    pub fn weekday_of(&self, day: u32) -> Option<Weekday> {
        if !self.contains_day(day) {
            return None;
        }
        self.weekdays.get(day as usize - 1).copied()
    }

    /// Returns true if the given day is a Sunday.
    pub fn is_sunday(&self, day: u32) -> bool {
        self.sundays.contains(&day)
    }

    /// The calendar date of the given day.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Month header label, e.g. `"March-2024"`.
    pub fn label(&self) -> String {
        self.date_of(1)
            .map(|d| d.format("%B-%Y").to_string())
            .unwrap_or_default()
    }

    /// Upper-case short weekday name for a column header, e.g. `"MON"`.
    pub fn weekday_label(&self, day: u32) -> Option<String> {
        self.weekday_of(day).map(|w| w.to_string().to_uppercase())
    }

    /// Short date for a column header, e.g. `"5/03/24"`.
    pub fn date_label(&self, day: u32) -> Option<String> {
        if !self.contains_day(day) {
            return None;
        }
        Some(format!(
            "{}/{:02}/{:02}",
            day,
            self.month,
            self.year.rem_euclid(100)
        ))
    }

    /// Returns true if the timestamp's date lies in this month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
