//! Days-worked counting for bonus proration.

use chrono::NaiveDate;

use crate::models::SemesterWindow;

/// Counts the days an employee worked within a semester window.
///
/// The count runs from the later of the employment start date and the
/// semester start, through the semester end, inclusive of both ends, and is
/// clamped to `[0, total_days]`.
///
/// # Example
///
/// ```
/// use sac_engine::calculation::{count_days_worked, resolve_semester_window};
/// use chrono::NaiveDate;
///
/// let window = resolve_semester_window("2024-1").unwrap();
///
/// // Started before the semester: the whole window counts.
/// let veteran = NaiveDate::from_ymd_opt(2020, 5, 10).unwrap();
/// assert_eq!(count_days_worked(veteran, &window), 182);
///
/// // Started mid-semester: only the tail counts.
/// let newcomer = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
/// assert_eq!(count_days_worked(newcomer, &window), 77);
/// ```
pub fn count_days_worked(start_date: NaiveDate, window: &SemesterWindow) -> i64 {
    let effective_start = start_date.max(window.start_date);
    let days = (window.end_date - effective_start).num_days() + 1;
    days.clamp(0, window.total_days)
}
