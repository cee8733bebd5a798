//! Calculation logic for the Attendance Engine.
//!
//! This module contains the reporting month resolver, the punch log parser,
//! the work hours calculator, day status classification with late-arrival
//! flagging, holiday providers, and the report builder that orchestrates
//! them.

mod day_status;
mod holidays;
mod month_context;
mod punch_parser;
mod report_builder;
mod work_hours;

pub use day_status::{FIRST_PUNCH_INDEX, THIRD_PUNCH_INDEX, classify_day, late_punch_flags};
pub use holidays::{FixedHolidays, HolidayProvider, HolidayText, NoHolidays};
pub use month_context::{DATE_FORMAT, resolve_month_context};
pub use punch_parser::{LineOutcome, ParsedLog, TIMESTAMP_FORMAT, parse_punch_line, parse_punch_log};
pub use report_builder::{build_attendance_report, build_day_record};
pub use work_hours::calculate_work_hours;
