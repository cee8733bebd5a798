//! Per-day attendance records.
//!
//! A [`DayRecord`] is the detail-view row for one employee on one day: the
//! sorted punches, the computed work hours and the day's status.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Status category of a day for one employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::Present.symbol(), "P");
/// assert_eq!(DayStatus::Absent.symbol(), "AB");
/// assert_eq!(DayStatus::Holiday.symbol(), "H");
/// assert_eq!(DayStatus::Unmarked.symbol(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// At least one punch on a working day or a Sunday.
    Present,
    /// No punch on a regular working day.
    Absent,
    /// Declared holiday, whatever the weekday or punches.
    Holiday,
    /// Sunday without punches. Not counted as present, not penalized.
    Unmarked,
}

impl DayStatus {
    /// Grid symbol for the status.
    pub fn symbol(&self) -> &'static str {
        match self {
            DayStatus::Present => "P",
            DayStatus::Absent => "AB",
            DayStatus::Holiday => "H",
            DayStatus::Unmarked => "",
        }
    }

    /// Returns true if the day counts toward the present-day total.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, DayStatus::Present)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::Unmarked => write!(f, "Unmarked"),
        }
    }
}

/// Sentinel text for days whose punches cannot be paired.
pub const NOT_APPLICABLE: &str = "N.A.";

/// Total worked time for a day, or the "not applicable" sentinel.
///
/// Serialized as its display text: `"HH:MM"` or `"N.A."`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkHours;
///
/// assert_eq!(WorkHours::from_minutes(510).to_string(), "08:30");
/// assert_eq!(WorkHours::NotApplicable.to_string(), "N.A.");
/// assert_eq!("08:30".parse::<WorkHours>().unwrap(), WorkHours::from_minutes(510));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WorkHours {
    /// Whole minutes worked across all punch pairs.
    Worked {
        /// Total minutes, floored.
        minutes: i64,
    },
    /// Odd punch count, a single punch, no punches, or a negative interval.
    NotApplicable,
}

impl WorkHours {
    /// Creates a worked duration from whole minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        WorkHours::Worked { minutes }
    }

    /// Worked minutes, or `None` for the sentinel.
    pub fn minutes(&self) -> Option<i64> {
        match self {
            WorkHours::Worked { minutes } => Some(*minutes),
            WorkHours::NotApplicable => None,
        }
    }

    /// Returns true for the "not applicable" sentinel.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, WorkHours::NotApplicable)
    }
}

impl fmt::Display for WorkHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // hours are not clamped at 24
            WorkHours::Worked { minutes } => write!(f, "{:02}:{:02}", minutes / 60, minutes % 60),
            WorkHours::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl FromStr for WorkHours {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOT_APPLICABLE {
            return Ok(WorkHours::NotApplicable);
        }
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid work hours '{}'", s))?;
        let hours: i64 = hours
            .parse()
            .map_err(|_| format!("invalid hours in '{}'", s))?;
        let minutes: i64 = minutes
            .parse()
            .map_err(|_| format!("invalid minutes in '{}'", s))?;
        if !(0..60).contains(&minutes) || hours < 0 {
            return Err(format!("work hours out of range '{}'", s));
        }
        Ok(WorkHours::from_minutes(hours * 60 + minutes))
    }
}

impl From<WorkHours> for String {
    fn from(hours: WorkHours) -> Self {
        hours.to_string()
    }
}

impl TryFrom<String> for WorkHours {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One employee's attendance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day of month.
    pub day: u32,
    /// Weekday of the day.
    pub weekday: Weekday,
    /// The day's punches, sorted ascending.
    pub punches: Vec<NaiveDateTime>,
    /// Computed work hours.
    pub hours: WorkHours,
    /// Status classification.
    pub status: DayStatus,
    /// 0-based indices into `punches` of late punches.
    pub late_flags: BTreeSet<usize>,
}

impl DayRecord {
    /// Returns true if the punch at `index` was flagged late.
    pub fn is_late(&self, index: usize) -> bool {
        self.late_flags.contains(&index)
    }

    /// Time-of-day of each punch, in order.
    pub fn punch_times(&self) -> Vec<NaiveTime> {
        self.punches.iter().map(|p| p.time()).collect()
    }
}
