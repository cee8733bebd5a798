//! Attendance report assembly.
//!
//! This module ties the pieces together: it resolves the reporting month,
//! parses the log, asks the holiday provider for the month's holidays and
//! then builds one [`DayRecord`] per employee per day. The presence grid is
//! derived from those records so both views always agree.

use chrono::{NaiveDateTime, Utc, Weekday};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AttendancePolicy;
use crate::error::EngineResult;
use crate::models::{
    AttendanceIndex, AttendanceReport, DayRecord, DayStatus, Employee, EmployeeDetail, GridRow,
    HolidaySet, MonthContext, Roster,
};

use super::day_status::{classify_day, late_punch_flags};
use super::holidays::HolidayProvider;
use super::month_context::resolve_month_context;
use super::punch_parser::parse_punch_log;
use super::work_hours::hours_from_sorted;

/// Builds the monthly attendance report from raw punch log lines.
///
/// The grid is ordered alphabetically by employee name; detail sections
/// follow roster declaration order. Rostered employees missing from the log
/// still get a full month of records.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::EmptyInput`] if no line carries a
/// parseable date. Every other problem degrades individual cells instead.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{FixedHolidays, build_attendance_report};
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::{DayStatus, Employee, Roster};
///
/// let roster = Roster::new(vec![Employee::new("Eve", 1)])?;
/// let lines = ["1 2024-03-05 09:00:00", "1 2024-03-05 17:30:00"];
/// let report = build_attendance_report(
///     &lines,
///     &roster,
///     &FixedHolidays(vec![8]),
///     &AttendancePolicy::default(),
/// )?;
///
/// let day = report.day_record(1, 5).unwrap();
/// assert_eq!(day.hours.to_string(), "08:30");
/// assert_eq!(day.status, DayStatus::Present);
/// assert_eq!(report.cell(1, 8), Some("H"));
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn build_attendance_report<S, H>(
    lines: &[S],
    roster: &Roster,
    holidays: &H,
    policy: &AttendancePolicy,
) -> EngineResult<AttendanceReport>
where
    S: AsRef<str>,
    H: HolidayProvider + ?Sized,
{
    let month = resolve_month_context(lines)?;
    let parsed = parse_punch_log(lines, roster);
    let holidays = holidays.resolve_holidays(&month);

    info!(
        month = %month.label(),
        days_in_month = month.days_in_month,
        holidays = holidays.len(),
        employees = roster.len(),
        "Building attendance report"
    );

    let details: Vec<EmployeeDetail> = roster
        .employees()
        .iter()
        .map(|employee| build_employee_detail(employee, &month, &holidays, &parsed.index, policy))
        .collect();

    let mut parse_stats = parsed.stats;
    parse_stats.unfiled = roster
        .employees()
        .iter()
        .map(|employee| warn_unfiled(employee, &month, &parsed.index))
        .sum();

    let grid: Vec<GridRow> = roster
        .sorted_by_name()
        .into_iter()
        .filter_map(|employee| details.iter().find(|d| d.employee.id == employee.id))
        .map(grid_row)
        .collect();

    let day_totals = day_totals(&grid, &month);

    info!(
        present_days = grid.iter().map(|row| row.total).sum::<u32>(),
        diagnostics = parsed.diagnostics.len(),
        "Attendance report built"
    );

    Ok(AttendanceReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        month,
        holidays,
        grid,
        day_totals,
        details,
        diagnostics: parsed.diagnostics,
        parse_stats,
    })
}

/// Builds one employee's record for one day.
///
/// Punches may be in any order; they are sorted before pairing and before
/// late flags are evaluated. Status depends on punch presence only, so a
/// day with unpairable punches is still present.
pub fn build_day_record(
    day: u32,
    weekday: Weekday,
    punches: &[NaiveDateTime],
    holidays: &HolidaySet,
    policy: &AttendancePolicy,
) -> DayRecord {
    let mut sorted = punches.to_vec();
    sorted.sort();

    DayRecord {
        day,
        weekday,
        hours: hours_from_sorted(&sorted),
        status: classify_day(day, weekday, holidays, !sorted.is_empty()),
        late_flags: late_punch_flags(&sorted, policy),
        punches: sorted,
    }
}

fn build_employee_detail(
    employee: &Employee,
    month: &MonthContext,
    holidays: &HolidaySet,
    index: &AttendanceIndex,
    policy: &AttendancePolicy,
) -> EmployeeDetail {
    let days: Vec<DayRecord> = month
        .weekdays
        .iter()
        .zip(month.days())
        .map(|(weekday, day)| {
            let punches = index.punches(employee.id, day);
            warn_out_of_month(employee, month, punches);
            build_day_record(day, *weekday, punches, holidays, policy)
        })
        .collect();

    let worked_minutes: i64 = days.iter().filter_map(|r| r.hours.minutes()).sum();
    let total_worked_hours = (Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)).round_dp(2);

    debug!(
        employee_id = employee.id,
        present = days.iter().filter(|r| r.status == DayStatus::Present).count(),
        not_applicable = days
            .iter()
            .filter(|r| !r.punches.is_empty() && r.hours.is_not_applicable())
            .count(),
        "Employee detail built"
    );

    EmployeeDetail {
        employee: employee.clone(),
        days,
        total_worked_hours,
    }
}

// Punches are filed by day of month only, so a log spanning two months
// lands later-month punches on the matching day of the reporting month.
fn warn_out_of_month(employee: &Employee, month: &MonthContext, punches: &[NaiveDateTime]) {
    for punch in punches.iter().filter(|p| !month.contains_date(p.date())) {
        warn!(
            employee_id = employee.id,
            punch = %punch,
            month = %month.label(),
            "Punch outside the reporting month filed by day of month"
        );
    }
}

// Days past the end of the reporting month have no record to land in.
fn warn_unfiled(employee: &Employee, month: &MonthContext, index: &AttendanceIndex) -> usize {
    index
        .days_for(employee.id)
        .into_iter()
        .filter(|day| !month.contains_day(*day))
        .flat_map(|day| index.punches(employee.id, day))
        .inspect(|punch| {
            warn!(
                employee_id = employee.id,
                punch = %punch,
                month = %month.label(),
                "Punch day does not exist in the reporting month; not filed"
            );
        })
        .count()
}

fn grid_row(detail: &EmployeeDetail) -> GridRow {
    let cells: Vec<String> = detail
        .days
        .iter()
        .map(|r| r.status.symbol().to_string())
        .collect();
    let total = detail
        .days
        .iter()
        .filter(|r| r.status.counts_as_present())
        .count() as u32;

    GridRow {
        employee: detail.employee.clone(),
        cells,
        total,
    }
}

fn day_totals(grid: &[GridRow], month: &MonthContext) -> Vec<u32> {
    month
        .days()
        .map(|day| {
            let idx = day as usize - 1;
            grid.iter()
                .filter(|row| row.cells.get(idx).is_some_and(|c| c == DayStatus::Present.symbol()))
                .count() as u32
        })
        .collect()
}
