//! Semi-annual bonus (aguinaldo) calculation.
//!
//! Composes the semester window, days-worked, and best-compensation modules
//! into the final bonus determination. Malformed input never raises: every
//! bad path degrades to a non-corresponding result with a human-readable
//! reason, so report generation over an entire roster cannot be aborted by
//! one bad record.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BonusResult, EmployeeSnapshot, PayrollRecord};

use super::best_compensation::{BASE_WAGE_LABEL, resolve_best_compensation};
use super::days_worked::count_days_worked;
use super::semester_window::resolve_semester_window;

/// Reason reported when the semester token does not parse.
pub const REASON_INVALID_PERIOD: &str = "Invalid period";
/// Reason reported when the employee started after the semester ended.
pub const REASON_NOT_WORKED: &str = "No trabajó en este período";
/// Reason reported for a full, non-prorated bonus.
pub const REASON_FULL: &str = "Aguinaldo completo";
/// Reason reported for a bonus prorated by days worked.
pub const REASON_PROPORTIONAL: &str = "Aguinaldo proporcional por días trabajados";

/// Days per month used for proration.
///
/// A fixed 30-day month convention, independent of the semester's true day
/// count. Observed settlement behavior; do not replace with the calendar
/// month length.
const PRORATION_MONTH_DAYS: i64 = 30;

/// Rounds a monetary value to whole currency units.
///
/// Applied once, at the final step of a calculation; intermediate values
/// keep full precision.
fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Builds the non-corresponding result every degraded path shares.
fn not_corresponding(total_days: i64, best_compensation: Decimal, reason: &str) -> BonusResult {
    BonusResult {
        corresponds: false,
        amount: Decimal::ZERO,
        days_worked: 0,
        total_days,
        proportional: false,
        best_compensation,
        best_compensation_period: BASE_WAGE_LABEL.to_string(),
        full_bonus_amount: Decimal::ZERO,
        reason: reason.to_string(),
    }
}

/// Determines the semi-annual bonus for one employee and one semester.
///
/// The determination:
/// 1. Resolves the semester window from the token; an unparseable token
///    yields a non-corresponding result with reason [`REASON_INVALID_PERIOD`].
/// 2. An employee who started after the semester ended gets a
///    non-corresponding result with reason [`REASON_NOT_WORKED`].
/// 3. Counts days actually worked inside the window.
/// 4. Resolves the bonus basis from the payroll history, floored at the
///    contracted base wage.
/// 5. A full semester pays `basis / 12 × 6`; fewer days pay
///    `basis / 12 × (days / 30)`. Amounts are rounded to whole currency
///    units at the final step only.
///
/// # Example
///
/// ```
/// use sac_engine::calculation::calculate_bonus;
/// use sac_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSnapshot {
///     id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2020, 5, 10).unwrap(),
///     base_wage: Some(Decimal::from(100_000)),
///     deposit_wage: Decimal::ZERO,
///     cash_wage: Decimal::ZERO,
///     presentismo: Decimal::ZERO,
/// };
///
/// let result = calculate_bonus(&employee, "2024-1", &[]);
/// assert!(result.corresponds);
/// assert_eq!(result.amount, Decimal::from(50_000));
/// assert!(!result.proportional);
/// ```
pub fn calculate_bonus(
    employee: &EmployeeSnapshot,
    semester_token: &str,
    payroll_history: &[PayrollRecord],
) -> BonusResult {
    let Some(window) = resolve_semester_window(semester_token) else {
        return not_corresponding(0, employee.contracted_base(), REASON_INVALID_PERIOD);
    };

    if employee.start_date > window.end_date {
        return not_corresponding(
            window.total_days,
            employee.contracted_base(),
            REASON_NOT_WORKED,
        );
    }

    let days_worked = count_days_worked(employee.start_date, &window);

    let best = resolve_best_compensation(
        &employee.id,
        &window,
        payroll_history,
        employee.contracted_base(),
    );

    let monthly_rate = best.value / Decimal::from(12);
    let full_bonus_amount = round_currency(monthly_rate * Decimal::from(6));
    let proportional_amount = round_currency(
        monthly_rate * (Decimal::from(days_worked) / Decimal::from(PRORATION_MONTH_DAYS)),
    );

    let proportional = days_worked < window.total_days;
    let (amount, reason) = if proportional {
        (proportional_amount, REASON_PROPORTIONAL)
    } else {
        (full_bonus_amount, REASON_FULL)
    };

    BonusResult {
        corresponds: true,
        amount,
        days_worked,
        total_days: window.total_days,
        proportional,
        best_compensation: best.value,
        best_compensation_period: best.period_label,
        full_bonus_amount,
        reason: reason.to_string(),
    }
}
