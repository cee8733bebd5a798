//! Reporting month resolution.
//!
//! The first line whose second token parses as a `YYYY-MM-DD` date fixes
//! the reporting month for the whole run. Later lines are not checked
//! against it.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::MonthContext;

/// Date format of the punch log's date token.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves the reporting month from raw punch log lines.
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] if no line yields a parseable date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::resolve_month_context;
///
/// let lines = ["header text", "1 2024-03-05 09:00:00"];
/// let month = resolve_month_context(&lines)?;
/// assert_eq!((month.year, month.month, month.days_in_month), (2024, 3, 31));
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn resolve_month_context<S: AsRef<str>>(lines: &[S]) -> EngineResult<MonthContext> {
    let (line_number, date) = lines
        .iter()
        .enumerate()
        .find_map(|(idx, line)| first_date(line.as_ref()).map(|date| (idx + 1, date)))
        .ok_or(EngineError::EmptyInput)?;

    debug!(line_number, %date, "Reporting month fixed by first dated line");

    MonthContext::new(date.year(), date.month()).ok_or(EngineError::EmptyInput)
}

fn first_date(line: &str) -> Option<NaiveDate> {
    let token = line.split_whitespace().nth(1)?;
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}
