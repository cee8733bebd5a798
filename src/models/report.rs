//! Attendance report models.
//!
//! This module contains the [`AttendanceReport`] type and its associated
//! structures. The report is the only artifact handed to rendering; it is
//! built once and never mutated afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    DayRecord, Employee, EmployeeId, HolidaySet, MonthContext, ParseDiagnostic, ParseStats,
};

/// One row of the presence grid.
///
/// `cells[d - 1]` is the status symbol for day `d`: `"P"`, `"AB"`, `"H"`
/// or `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// The employee this row belongs to.
    pub employee: Employee,
    /// Status symbol for each day of the month.
    pub cells: Vec<String>,
    /// Number of cells equal to `"P"`.
    pub total: u32,
}

/// The detail section for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    /// The employee this section belongs to.
    pub employee: Employee,
    /// One record per day of the month, in day order.
    pub days: Vec<DayRecord>,
    /// Sum of worked hours over days with valid punch pairs, to 2 dp.
    pub total_worked_hours: Decimal,
}

/// The complete monthly attendance report.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{NoHolidays, build_attendance_report};
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::{Employee, Roster};
///
/// let roster = Roster::new(vec![Employee::new("Eve", 1)])?;
/// let lines = ["1 2024-03-05 09:00:00", "1 2024-03-05 17:30:00"];
/// let report = build_attendance_report(&lines, &roster, &NoHolidays, &AttendancePolicy::default())?;
///
/// assert_eq!(report.cell(1, 5), Some("P"));
/// assert_eq!(report.total_for(1), Some(1));
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The reporting month.
    pub month: MonthContext,
    /// Declared holidays used for classification.
    pub holidays: HolidaySet,
    /// Presence grid rows, ordered alphabetically by employee name.
    pub grid: Vec<GridRow>,
    /// Number of `"P"` cells per day, indexed by `day - 1`.
    pub day_totals: Vec<u32>,
    /// Detail sections, in roster declaration order.
    pub details: Vec<EmployeeDetail>,
    /// Lines skipped as malformed.
    pub diagnostics: Vec<ParseDiagnostic>,
    /// Line counters from parsing the log.
    pub parse_stats: ParseStats,
}

impl AttendanceReport {
    /// Grid row for an employee.
    pub fn grid_row(&self, employee_id: EmployeeId) -> Option<&GridRow> {
        self.grid.iter().find(|row| row.employee.id == employee_id)
    }

    /// Grid symbol for an employee on a day.
    pub fn cell(&self, employee_id: EmployeeId, day: u32) -> Option<&str> {
        let idx = (day as usize).checked_sub(1)?;
        self.grid_row(employee_id)?
            .cells
            .get(idx)
            .map(String::as_str)
    }

    /// Present-day total for an employee.
    pub fn total_for(&self, employee_id: EmployeeId) -> Option<u32> {
        self.grid_row(employee_id).map(|row| row.total)
    }

    /// Detail section for an employee.
    pub fn detail_for(&self, employee_id: EmployeeId) -> Option<&EmployeeDetail> {
        self.details.iter().find(|d| d.employee.id == employee_id)
    }

    /// Detail record for an employee on a day.
    pub fn day_record(&self, employee_id: EmployeeId, day: u32) -> Option<&DayRecord> {
        self.detail_for(employee_id)?
            .days
            .iter()
            .find(|r| r.day == day)
    }
}
