//! Payroll settlement record model.
//!
//! One [`PayrollRecord`] captures everything an employee was paid (and
//! charged) for a single calendar month. Every money field defaults to zero
//! at the serde boundary, so records coming from sparse storage arrive fully
//! populated and the arithmetic below is free of null-checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// One employee's settlement for one calendar month.
///
/// # Example
///
/// ```
/// use sac_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "employee_id": "emp_001",
///     "period": "2024-03",
///     "deposit_amount": "80000",
///     "cash_amount": "30000",
///     "overtime_amount": "5000",
///     "holiday_bonus": "7000"
/// }"#;
/// let record: PayrollRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.adjusted_salary(), Decimal::from(122_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee this settlement belongs to.
    pub employee_id: String,
    /// The calendar month being settled.
    pub period: Period,
    /// Formally paid, bank-deposited wage.
    #[serde(default)]
    pub deposit_amount: Decimal,
    /// Informally paid wage.
    #[serde(default)]
    pub cash_amount: Decimal,
    /// Overtime paid in this month.
    #[serde(default)]
    pub overtime_amount: Decimal,
    /// Holiday work bonus paid in this month.
    #[serde(default)]
    pub holiday_bonus: Decimal,
    /// Attendance bonus (presentismo) paid in this month.
    #[serde(default)]
    pub presentismo_amount: Decimal,
    /// Discretionary bonus paid in this month.
    #[serde(default)]
    pub bonus_amount: Decimal,
    /// Semi-annual bonus already settled in this record, if any.
    #[serde(default)]
    pub aguinaldo: Decimal,
    /// Wage advances already handed out, deducted from the settlement.
    #[serde(default)]
    pub advances: Decimal,
    /// Other deductions applied to the settlement.
    #[serde(default)]
    pub discounts: Decimal,
}

impl PayrollRecord {
    /// The net amount settled by this record.
    ///
    /// Sum of every payment component minus advances and discounts,
    /// clamped at zero.
    pub fn net_total(&self) -> Decimal {
        let earnings = self.deposit_amount
            + self.cash_amount
            + self.overtime_amount
            + self.holiday_bonus
            + self.presentismo_amount
            + self.bonus_amount
            + self.aguinaldo;
        (earnings - self.advances - self.discounts).max(Decimal::ZERO)
    }

    /// The salary value this record contributes to a bonus basis.
    ///
    /// Ordinary pay components count (deposit, cash, overtime, holiday
    /// bonus); the attendance bonus and any bonus already settled are
    /// excluded so one-off extras and previously-paid bonus amounts do not
    /// inflate the basis. Clamped at zero.
    pub fn adjusted_salary(&self) -> Decimal {
        let included =
            self.deposit_amount + self.cash_amount + self.overtime_amount + self.holiday_bonus;
        let excluded = self.presentismo_amount + self.aguinaldo;
        (included - excluded).max(Decimal::ZERO)
    }
}
