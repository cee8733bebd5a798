//! Punch events and the per-employee attendance index.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{EmployeeId, Roster};

/// A single clock-in or clock-out action.
///
/// Punches carry no direction. Whether a punch is an "in" or an "out" is
/// inferred from its position in the day's sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// Badge identifier from the log line.
    pub employee_id: EmployeeId,
    /// When the punch happened, to the second.
    pub timestamp: NaiveDateTime,
}

impl PunchEvent {
    /// Day of month the punch belongs to.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }
}

/// A log line that looked like a punch but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    /// 1-based line number within the input.
    pub line_number: usize,
    /// The offending line, without its trailing newline.
    pub line: String,
    /// Why the line was skipped.
    pub reason: String,
}

/// Line counters collected while parsing a punch log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Punches filed for rostered employees.
    pub accepted: usize,
    /// Well-formed punches for ids outside the roster.
    pub unknown_employee: usize,
    /// Lines with fewer than three tokens.
    pub ignored: usize,
    /// Lines skipped as malformed.
    pub malformed: usize,
    /// Accepted punches whose day of month does not exist in the reporting
    /// month, so no day record can hold them.
    #[serde(default)]
    pub unfiled: usize,
}

/// Punches grouped by employee and day of month.
///
/// Every rostered employee has an entry, possibly empty. Timestamps within
/// a day are kept in encounter order; consumers sort before pairing.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceIndex, Employee, PunchEvent, Roster};
/// use chrono::NaiveDateTime;
///
/// let roster = Roster::new(vec![Employee::new("Eve", 1)])?;
/// let mut index = AttendanceIndex::for_roster(&roster);
/// let ts = NaiveDateTime::parse_from_str("2024-03-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(index.record(PunchEvent { employee_id: 1, timestamp: ts }));
/// assert_eq!(index.punches(1, 5).len(), 1);
/// assert!(index.punches(1, 6).is_empty());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceIndex {
    entries: HashMap<EmployeeId, BTreeMap<u32, Vec<NaiveDateTime>>>,
}

impl AttendanceIndex {
    /// Creates an index with an empty entry for every rostered employee.
    pub fn for_roster(roster: &Roster) -> Self {
        let entries = roster
            .employees()
            .iter()
            .map(|e| (e.id, BTreeMap::new()))
            .collect();
        Self { entries }
    }

    /// Files a punch under its employee and day.
    ///
    /// Returns false, leaving the index untouched, when the employee is not
    /// part of the index.
    pub fn record(&mut self, punch: PunchEvent) -> bool {
        match self.entries.get_mut(&punch.employee_id) {
            Some(days) => {
                days.entry(punch.day()).or_default().push(punch.timestamp);
                true
            }
            None => false,
        }
    }

    /// Returns the punches for an employee on a day, in encounter order.
    pub fn punches(&self, employee_id: EmployeeId, day: u32) -> &[NaiveDateTime] {
        self.entries
            .get(&employee_id)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the employee punched at least once on the day.
    pub fn has_punches(&self, employee_id: EmployeeId, day: u32) -> bool {
        !self.punches(employee_id, day).is_empty()
    }

    /// Returns the days on which the employee punched, ascending.
    pub fn days_for(&self, employee_id: EmployeeId) -> Vec<u32> {
        self.entries
            .get(&employee_id)
            .map(|days| days.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of punches filed for the employee.
    pub fn punch_count(&self, employee_id: EmployeeId) -> usize {
        self.entries
            .get(&employee_id)
            .map(|days| days.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}
