//! Day status classification and late-arrival flagging.
//!
//! Classification is an ordered rule list; the first matching rule wins:
//!
//! 1. Declared holiday: [`DayStatus::Holiday`], whatever the weekday or punches.
//! 2. Sunday: [`DayStatus::Present`] with punches, otherwise [`DayStatus::Unmarked`].
//! 3. Any other day: [`DayStatus::Present`] with punches, otherwise [`DayStatus::Absent`].
//!
//! Late flags only annotate the detail view and never change the status.

use std::collections::BTreeSet;

use chrono::{NaiveDateTime, Weekday};

use crate::config::AttendancePolicy;
use crate::models::{DayStatus, HolidaySet};

/// Index of the morning clock-in within a day's sorted punches.
pub const FIRST_PUNCH_INDEX: usize = 0;

/// Index of the clock-in after the midday break.
pub const THIRD_PUNCH_INDEX: usize = 2;

/// Classifies one employee's day.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify_day;
/// use attendance_engine::models::{DayStatus, HolidaySet};
/// use chrono::Weekday;
///
/// let holidays: HolidaySet = [3].into_iter().collect();
///
/// // Sunday the 3rd is also a holiday: holiday wins
/// assert_eq!(classify_day(3, Weekday::Sun, &holidays, false), DayStatus::Holiday);
/// assert_eq!(classify_day(10, Weekday::Sun, &holidays, false), DayStatus::Unmarked);
/// assert_eq!(classify_day(11, Weekday::Mon, &holidays, false), DayStatus::Absent);
/// assert_eq!(classify_day(11, Weekday::Mon, &holidays, true), DayStatus::Present);
/// ```
pub fn classify_day(
    day: u32,
    weekday: Weekday,
    holidays: &HolidaySet,
    has_punches: bool,
) -> DayStatus {
    match (holidays.contains(day), weekday, has_punches) {
        (true, _, _) => DayStatus::Holiday,
        (false, Weekday::Sun, true) => DayStatus::Present,
        (false, Weekday::Sun, false) => DayStatus::Unmarked,
        (false, _, true) => DayStatus::Present,
        (false, _, false) => DayStatus::Absent,
    }
}

/// Flags late punches in a day's sorted punch list.
///
/// The first punch is late if its time-of-day is after
/// `first_punch_late_after`; the third punch, if present, is late if it is
/// after `third_punch_late_after`. A punch exactly on the threshold is on
/// time.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::late_punch_flags;
/// use attendance_engine::config::AttendancePolicy;
/// use chrono::NaiveDateTime;
///
/// let ts = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let punches = [ts("2024-03-05 09:10:00"), ts("2024-03-05 17:00:00")];
/// let flags = late_punch_flags(&punches, &AttendancePolicy::default());
/// assert!(flags.contains(&0));
/// assert_eq!(flags.len(), 1);
/// ```
pub fn late_punch_flags(sorted: &[NaiveDateTime], policy: &AttendancePolicy) -> BTreeSet<usize> {
    let checks = [
        (FIRST_PUNCH_INDEX, policy.first_punch_late_after),
        (THIRD_PUNCH_INDEX, policy.third_punch_late_after),
    ];

    checks
        .into_iter()
        .filter(|(idx, threshold)| sorted.get(*idx).is_some_and(|p| p.time() > *threshold))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn ts(time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2024-03-05 {}", time), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn holidays(days: &[u32]) -> HolidaySet {
        days.iter().copied().collect()
    }

    #[test]
    fn test_holiday_beats_punches() {
        assert_eq!(
            classify_day(5, Weekday::Tue, &holidays(&[5]), true),
            DayStatus::Holiday
        );
    }

    #[test]
    fn test_holiday_beats_sunday() {
        for has_punches in [true, false] {
            assert_eq!(
                classify_day(3, Weekday::Sun, &holidays(&[3]), has_punches),
                DayStatus::Holiday
            );
        }
    }

    #[test]
    fn test_sunday_with_punches_present() {
        assert_eq!(
            classify_day(3, Weekday::Sun, &holidays(&[]), true),
            DayStatus::Present
        );
    }

    #[test]
    fn test_sunday_without_punches_unmarked() {
        assert_eq!(
            classify_day(3, Weekday::Sun, &holidays(&[]), false),
            DayStatus::Unmarked
        );
    }

    #[test]
    fn test_saturday_is_a_regular_day() {
        assert_eq!(
            classify_day(2, Weekday::Sat, &holidays(&[]), false),
            DayStatus::Absent
        );
    }

    #[test]
    fn test_late_first_punch() {
        let punches = [ts("09:10:00"), ts("17:00:00")];
        let flags = late_punch_flags(&punches, &AttendancePolicy::default());
        assert_eq!(flags, BTreeSet::from([0]));
    }

    #[test]
    fn test_threshold_boundary_is_on_time() {
        let punches = [ts("09:05:00"), ts("13:00:00"), ts("13:35:00"), ts("18:00:00")];
        assert!(late_punch_flags(&punches, &AttendancePolicy::default()).is_empty());
    }

    #[test]
    fn test_one_second_past_threshold_is_late() {
        let punches = [ts("09:05:01"), ts("13:00:00"), ts("13:35:01"), ts("18:00:00")];
        assert_eq!(
            late_punch_flags(&punches, &AttendancePolicy::default()),
            BTreeSet::from([0, 2])
        );
    }

    #[test]
    fn test_even_index_punches_other_than_first_and_third_never_flagged() {
        let punches = [
            ts("08:00:00"),
            ts("12:00:00"),
            ts("13:00:00"),
            ts("16:00:00"),
            ts("23:00:00"),
            ts("23:30:00"),
        ];
        assert!(late_punch_flags(&punches, &AttendancePolicy::default()).is_empty());
    }

    #[test]
    fn test_no_punches_no_flags() {
        assert!(late_punch_flags(&[], &AttendancePolicy::default()).is_empty());
    }

    #[test]
    fn test_custom_thresholds() {
        let policy = AttendancePolicy {
            first_punch_late_after: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            third_punch_late_after: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        };
        let punches = [ts("08:30:00"), ts("12:00:00"), ts("13:10:00")];
        assert_eq!(late_punch_flags(&punches, &policy), BTreeSet::from([0, 2]));
    }
}
