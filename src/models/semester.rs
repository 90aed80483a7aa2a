//! Semester window value object.
//!
//! A [`SemesterWindow`] is the calendar range a bonus is settled over:
//! January through June (first semester) or July through December (second
//! semester) of one year. It is derived from a semester token per
//! calculation, never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The calendar boundaries of one bonus semester.
///
/// # Example
///
/// ```
/// use sac_engine::calculation::resolve_semester_window;
/// use chrono::NaiveDate;
///
/// let window = resolve_semester_window("2024-1").unwrap();
/// assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(window.end_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
/// assert_eq!(window.total_days, 182);
/// assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterWindow {
    /// The first day of the semester (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the semester (inclusive).
    pub end_date: NaiveDate,
    /// The inclusive day count between the boundaries.
    pub total_days: i64,
}

impl SemesterWindow {
    /// Checks if a given date falls within this semester.
    ///
    /// The check is inclusive of both boundary dates.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_first_semester_2024() -> SemesterWindow {
        SemesterWindow {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            total_days: 182,
        }
    }

    #[test]
    fn test_contains_date_within_window() {
        let window = create_first_semester_2024();
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }

    #[test]
    fn test_contains_boundary_dates() {
        let window = create_first_semester_2024();
        assert!(window.contains(window.start_date));
        assert!(window.contains(window.end_date));
    }

    #[test]
    fn test_contains_rejects_outside_dates() {
        let window = create_first_semester_2024();
        assert!(!window.contains(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }

    #[test]
    fn test_serialize_round_trip() {
        let window = create_first_semester_2024();
        let json = serde_json::to_string(&window).unwrap();
        assert!(json.contains("\"start_date\":\"2024-01-01\""));
        assert!(json.contains("\"total_days\":182"));
        let back: SemesterWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}
