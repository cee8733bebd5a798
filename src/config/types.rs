//! Configuration types for attendance reporting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Roster file structure (`roster.yaml`).
///
/// Employees are listed in declaration order; that order is kept for the
/// report's detail sections.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// The rostered employees.
    pub employees: Vec<Employee>,
}

/// Default time after which the first punch of a day is late.
pub fn default_first_punch_late_after() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 5, 0).expect("09:05:00 is a valid time")
}

/// Default time after which the third punch of a day is late.
pub fn default_third_punch_late_after() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 35, 0).expect("13:35:00 is a valid time")
}

/// Late-arrival thresholds (`policy.yaml`).
///
/// A punch is late only when its time-of-day is strictly after the
/// threshold; a punch exactly on the threshold is on time.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendancePolicy;
/// use chrono::NaiveTime;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.first_punch_late_after, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
/// assert_eq!(policy.third_punch_late_after, NaiveTime::from_hms_opt(13, 35, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Threshold for the morning clock-in.
    #[serde(default = "default_first_punch_late_after")]
    pub first_punch_late_after: NaiveTime,
    /// Threshold for the clock-in after the midday break.
    #[serde(default = "default_third_punch_late_after")]
    pub third_punch_late_after: NaiveTime,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            first_punch_late_after: default_first_punch_late_after(),
            third_punch_late_after: default_third_punch_late_after(),
        }
    }
}
