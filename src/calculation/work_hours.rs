//! Work hours calculation from a day's punches.
//!
//! Punches are paired strictly by position after sorting: `(p0, p1)`,
//! `(p2, p3)`, and so on. There is no in/out labelling, so any odd count is
//! unusable and yields the "not applicable" sentinel.

use chrono::NaiveDateTime;

use crate::models::WorkHours;

/// Calculates total worked time for one day's punches.
///
/// Returns [`WorkHours::NotApplicable`] when there are fewer than two
/// punches, an odd number of punches, or any pair with a negative interval.
/// Otherwise the pair durations are summed in seconds and floored to whole
/// minutes.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_work_hours;
/// use chrono::NaiveDateTime;
///
/// let ts = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let punches = [ts("2024-03-05 17:30:00"), ts("2024-03-05 09:00:00")];
/// assert_eq!(calculate_work_hours(&punches).to_string(), "08:30");
///
/// let odd = [ts("2024-03-05 09:00:00"), ts("2024-03-05 13:00:00"), ts("2024-03-05 14:00:00")];
/// assert_eq!(calculate_work_hours(&odd).to_string(), "N.A.");
/// ```
pub fn calculate_work_hours(punches: &[NaiveDateTime]) -> WorkHours {
    let mut sorted = punches.to_vec();
    sorted.sort();
    hours_from_sorted(&sorted)
}

/// Pairs already-sorted punches; see [`calculate_work_hours`].
pub(crate) fn hours_from_sorted(sorted: &[NaiveDateTime]) -> WorkHours {
    if sorted.len() < 2 || sorted.len() % 2 != 0 {
        return WorkHours::NotApplicable;
    }

    let mut total_seconds: i64 = 0;
    for pair in sorted.chunks_exact(2) {
        let interval = (pair[1] - pair[0]).num_seconds();
        if interval < 0 {
            return WorkHours::NotApplicable;
        }
        total_seconds += interval;
    }

    WorkHours::from_minutes(total_seconds / 60)
}
