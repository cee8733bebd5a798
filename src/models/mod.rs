//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod employee;
mod holiday;
mod month;
mod punch;
mod report;

pub use day_record::{DayRecord, DayStatus, NOT_APPLICABLE, WorkHours};
pub use employee::{Employee, EmployeeId, Roster};
pub use holiday::HolidaySet;
pub use month::MonthContext;
pub use punch::{AttendanceIndex, ParseDiagnostic, ParseStats, PunchEvent};
pub use report::{AttendanceReport, EmployeeDetail, GridRow};
