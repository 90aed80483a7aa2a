//! Request types for the SAC Calculation Engine API.
//!
//! Both endpoints receive everything they need in the request body: the
//! engine holds no state and performs no lookups of its own, so the caller
//! ships the already-fetched collections alongside the identifiers.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeSnapshot, PayrollRecord, Period, SalaryHistoryRecord};

/// Request body for the `/bonus` endpoint.
///
/// The semester is carried as the raw token: an unparseable token is a
/// degraded calculation result, not a request error, so that roster-wide
/// report generation never aborts on one bad row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusCalculationRequest {
    /// The employee to determine the bonus for.
    pub employee: EmployeeSnapshot,
    /// The semester token (`"YYYY-1"` / `"YYYY-2"`).
    pub semester: String,
    /// The payroll history the basis is resolved from.
    #[serde(default)]
    pub payroll_history: Vec<PayrollRecord>,
}

/// Request body for the `/salary-for-period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryForPeriodRequest {
    /// The employee whose compensation is being resolved.
    pub employee_id: String,
    /// The target calendar month.
    pub period: Period,
    /// The employee's salary-change history.
    #[serde(default)]
    pub salary_history: Vec<SalaryHistoryRecord>,
    /// The employee's payroll settlements.
    #[serde(default)]
    pub payroll_history: Vec<PayrollRecord>,
    /// The live employee record, when the caller has one.
    #[serde(default)]
    pub employee: Option<EmployeeSnapshot>,
}
