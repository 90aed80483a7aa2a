//! Best historical compensation resolution.
//!
//! The bonus basis is the highest qualifying compensation observed for an
//! employee, floored at the contracted base wage. This module walks the
//! payroll history to find it.

use rust_decimal::Decimal;

use crate::models::{PayrollRecord, SemesterWindow};

/// Label reported when the contracted base wage is the bonus basis.
pub const BASE_WAGE_LABEL: &str = "Sueldo base";

/// The resolved bonus basis and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestCompensation {
    /// The compensation value to compute the bonus from.
    pub value: Decimal,
    /// The period token that produced the value, or [`BASE_WAGE_LABEL`]
    /// when the contracted wage floor applied.
    pub period_label: String,
}

/// Determines the highest qualifying compensation for an employee.
///
/// Candidate records are the employee's settlements whose period falls
/// inside the semester window. When none fall inside — a late-processed or
/// misdated settlement would otherwise disqualify the employee — the
/// relaxation is to consider the employee's entire history. Each candidate
/// contributes its [`PayrollRecord::adjusted_salary`]; the maximum wins only
/// if it exceeds `base_wage`. The contracted base is a floor: historical pay
/// can raise the basis but never lower it below contract.
///
/// # Example
///
/// ```
/// use sac_engine::calculation::{resolve_best_compensation, resolve_semester_window};
/// use rust_decimal::Decimal;
///
/// let window = resolve_semester_window("2024-1").unwrap();
/// let best = resolve_best_compensation("emp_001", &window, &[], Decimal::from(100_000));
/// assert_eq!(best.value, Decimal::from(100_000));
/// assert_eq!(best.period_label, "Sueldo base");
/// ```
pub fn resolve_best_compensation(
    employee_id: &str,
    window: &SemesterWindow,
    payroll_history: &[PayrollRecord],
    base_wage: Decimal,
) -> BestCompensation {
    let mine: Vec<&PayrollRecord> = payroll_history
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .collect();

    let in_window: Vec<&PayrollRecord> = mine
        .iter()
        .copied()
        .filter(|record| window.contains(record.period.first_day()))
        .collect();

    let candidates = if in_window.is_empty() { &mine } else { &in_window };

    let best = candidates
        .iter()
        .map(|record| (record.adjusted_salary(), record.period))
        .max_by(|a, b| a.0.cmp(&b.0));

    match best {
        Some((value, period)) if value > base_wage => BestCompensation {
            value,
            period_label: period.to_string(),
        },
        _ => BestCompensation {
            value: base_wage,
            period_label: BASE_WAGE_LABEL.to_string(),
        },
    }
}
