//! Employee snapshot model.
//!
//! This module defines the read-only employee record the engine consumes.
//! The snapshot is assembled by the caller from whatever store holds the
//! roster; the engine never mutates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-only snapshot of one employee.
///
/// Optional money fields default to zero at the serde boundary so the
/// calculation modules never deal with missing values.
///
/// # Example
///
/// ```
/// use sac_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSnapshot {
///     id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2020, 5, 10).unwrap(),
///     base_wage: Some(Decimal::from(100_000)),
///     deposit_wage: Decimal::from(80_000),
///     cash_wage: Decimal::from(20_000),
///     presentismo: Decimal::ZERO,
/// };
/// assert_eq!(employee.contracted_base(), Decimal::from(100_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// The contracted monthly base wage, if one is on file.
    #[serde(default)]
    pub base_wage: Option<Decimal>,
    /// The bank-deposited component of the current monthly wage.
    #[serde(default)]
    pub deposit_wage: Decimal,
    /// The informally paid component of the current monthly wage.
    #[serde(default)]
    pub cash_wage: Decimal,
    /// The current monthly attendance bonus.
    #[serde(default)]
    pub presentismo: Decimal,
}

impl EmployeeSnapshot {
    /// The contracted base wage, or zero when none is on file.
    ///
    /// The base wage acts as the floor of every bonus basis; an employee
    /// with no contracted wage floors at zero.
    pub fn contracted_base(&self) -> Decimal {
        self.base_wage.unwrap_or(Decimal::ZERO)
    }
}
