//! Calculation result models for the SAC Calculation Engine.
//!
//! This module contains the value objects returned by the bonus calculator
//! and the salary-for-period resolver. Both are plain data: the report layer
//! renders them, nothing mutates them, and every failure path still produces
//! a structurally valid instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a resolved compensation value came from.
///
/// Report layers are expected to render non-authoritative sources (anything
/// other than [`SalarySource::HistoryNew`] or [`SalarySource::Current`])
/// distinctly rather than hiding the row.
///
/// # Example
///
/// ```
/// use sac_engine::models::SalarySource;
///
/// let json = serde_json::to_string(&SalarySource::HistoryNew).unwrap();
/// assert_eq!(json, "\"history_new\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalarySource {
    /// The employee's live compensation fields.
    Current,
    /// A history record effective on or before the target period.
    HistoryNew,
    /// The prior-regime snapshot of a change effective after the target.
    HistoryPrevious,
    /// The latest known change, used when nothing else dates correctly.
    HistoryLatest,
    /// Derived from a payroll settlement near the target period.
    PayrollRecord,
    /// Every lookup failed or came back empty.
    NotFound,
}

/// The outcome of one semi-annual bonus determination.
///
/// Invalid input never raises: the calculator degrades to a
/// non-corresponding result with `amount` zero and a human-readable
/// `reason`, so report generation over a whole roster survives bad rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusResult {
    /// Whether any bonus corresponds for this employee and semester.
    pub corresponds: bool,
    /// The bonus amount owed, rounded to whole currency units.
    pub amount: Decimal,
    /// Days the employee actually worked within the semester.
    pub days_worked: i64,
    /// Total days in the semester window.
    pub total_days: i64,
    /// Whether the amount was prorated by days worked.
    pub proportional: bool,
    /// The compensation value the bonus was computed from.
    pub best_compensation: Decimal,
    /// Label of the period that produced `best_compensation`, or
    /// `"Sueldo base"` when the contracted wage floor applied.
    pub best_compensation_period: String,
    /// The bonus a full semester would have yielded.
    pub full_bonus_amount: Decimal,
    /// Human-readable explanation of the determination.
    pub reason: String,
}

/// The compensation that applied to an employee in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryForPeriodResult {
    /// The bank-deposited monthly wage in force.
    pub deposit_wage: Decimal,
    /// The informally paid monthly wage in force.
    pub cash_wage: Decimal,
    /// The monthly attendance bonus in force.
    pub presentismo: Decimal,
    /// Which signal produced these values.
    pub source: SalarySource,
}

impl SalaryForPeriodResult {
    /// The terminal degradation result: all values zero, source
    /// [`SalarySource::NotFound`]. Returned when every lookup fails so that
    /// batch report generation never aborts.
    pub fn not_found() -> Self {
        Self {
            deposit_wage: Decimal::ZERO,
            cash_wage: Decimal::ZERO,
            presentismo: Decimal::ZERO,
            source: SalarySource::NotFound,
        }
    }
}
