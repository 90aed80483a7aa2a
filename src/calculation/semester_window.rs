//! Semester window resolution.
//!
//! This module turns a semester token (`"YYYY-1"` / `"YYYY-2"`) into the
//! calendar boundaries the bonus is settled over.

use chrono::NaiveDate;

use crate::models::SemesterWindow;

/// Resolves a semester token into its calendar window.
///
/// The first semester spans January 1 through June 30 (181 days, 182 in a
/// leap year); the second spans July 1 through December 31 (184 days).
/// `total_days` is the inclusive day count between the boundaries.
///
/// Returns `None` for any token that does not parse to a year plus a
/// semester of 1 or 2. Callers treat that as a non-eligible determination,
/// never a panic.
///
/// # Example
///
/// ```
/// use sac_engine::calculation::resolve_semester_window;
///
/// assert_eq!(resolve_semester_window("2023-1").unwrap().total_days, 181);
/// assert_eq!(resolve_semester_window("2024-1").unwrap().total_days, 182);
/// assert_eq!(resolve_semester_window("2024-2").unwrap().total_days, 184);
/// assert!(resolve_semester_window("2024-3").is_none());
/// assert!(resolve_semester_window("invalid").is_none());
/// ```
pub fn resolve_semester_window(token: &str) -> Option<SemesterWindow> {
    let (year, semester) = token.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let semester: u8 = semester.parse().ok()?;

    let (start_date, end_date) = match semester {
        1 => (
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 6, 30)?,
        ),
        2 => (
            NaiveDate::from_ymd_opt(year, 7, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ),
        _ => return None,
    };

    let total_days = (end_date - start_date).num_days() + 1;
    Some(SemesterWindow {
        start_date,
        end_date,
        total_days,
    })
}
