//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the `/report` endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::{FixedHolidays, HolidayProvider, HolidayText};
use crate::models::{HolidaySet, MonthContext};

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Raw punch log lines, in file order.
    pub lines: Vec<String>,
    /// Holidays for the month, as a list of days or as typed text.
    #[serde(default)]
    pub holidays: HolidaySelection,
}

/// Holidays as supplied by the caller.
///
/// Accepts either a JSON array of day numbers or the comma-separated text
/// a person would type, e.g. `"1,15,28"`. Out-of-range days are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HolidaySelection {
    /// Explicit day numbers.
    Days(Vec<u32>),
    /// Comma-separated text.
    Text(String),
}

impl Default for HolidaySelection {
    fn default() -> Self {
        HolidaySelection::Days(Vec::new())
    }
}

impl HolidayProvider for HolidaySelection {
    fn resolve_holidays(&self, month: &MonthContext) -> HolidaySet {
        match self {
            HolidaySelection::Days(days) => FixedHolidays(days.clone()).resolve_holidays(month),
            HolidaySelection::Text(text) => HolidayText::new(text.as_str()).resolve_holidays(month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_day_list() {
        let json = r#"{
            "lines": ["1 2024-03-05 09:00:00", "1 2024-03-05 17:30:00"],
            "holidays": [8, 22]
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.holidays, HolidaySelection::Days(vec![8, 22]));
    }

    #[test]
    fn test_deserialize_with_holiday_text() {
        let json = r#"{ "lines": [], "holidays": "1, 15,28" }"#;
        let request: ReportRequest = serde_json::from_str(json).unwrap();

        let month = MonthContext::new(2024, 3).unwrap();
        let set = request.holidays.resolve_holidays(&month);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 15, 28]);
    }

    #[test]
    fn test_holidays_default_to_none() {
        let request: ReportRequest = serde_json::from_str(r#"{ "lines": [] }"#).unwrap();
        assert_eq!(request.holidays, HolidaySelection::Days(vec![]));
    }

    #[test]
    fn test_missing_lines_rejected() {
        let result: Result<ReportRequest, _> = serde_json::from_str(r#"{ "holidays": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_list_out_of_range_dropped() {
        let month = MonthContext::new(2024, 2).unwrap();
        let set = HolidaySelection::Days(vec![29, 30]).resolve_holidays(&month);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![29]);
    }
}
