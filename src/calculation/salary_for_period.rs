//! Salary-for-period resolution.
//!
//! Compensation history is sparse and asynchronous: a raise effective next
//! month must not retroactively apply to past reports, while a month with no
//! recorded change should still reflect what was true then, inferred from
//! the nearest surrounding signal. This module walks that precedence chain
//! over injected read accessors.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::EngineResult;
use crate::models::{
    EmployeeSnapshot, PayrollRecord, Period, SalaryForPeriodResult, SalaryHistoryRecord,
    SalarySource,
};

/// Read access to an employee's salary-change history.
///
/// Implementations are typically backed by a database; they may fail or
/// return empty. The resolver treats both the same way.
pub trait SalaryHistorySource {
    /// All recorded compensation changes for one employee, any order.
    fn history_for(&self, employee_id: &str) -> EngineResult<Vec<SalaryHistoryRecord>>;
}

/// Read access to an employee's payroll settlements.
pub trait PayrollSource {
    /// All settlements for one employee, any order.
    fn records_for(&self, employee_id: &str) -> EngineResult<Vec<PayrollRecord>>;
}

/// Read access to the live employee roster.
pub trait EmployeeSource {
    /// The employee's current record, if one exists.
    fn employee(&self, employee_id: &str) -> EngineResult<Option<EmployeeSnapshot>>;
}

/// A [`SalaryHistorySource`] over an in-memory slice of records.
#[derive(Debug, Clone)]
pub struct InMemorySalaryHistorySource<'a> {
    records: &'a [SalaryHistoryRecord],
}

impl<'a> InMemorySalaryHistorySource<'a> {
    /// Wraps an already-fetched collection of history records.
    pub fn new(records: &'a [SalaryHistoryRecord]) -> Self {
        Self { records }
    }
}

impl SalaryHistorySource for InMemorySalaryHistorySource<'_> {
    fn history_for(&self, employee_id: &str) -> EngineResult<Vec<SalaryHistoryRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

/// A [`PayrollSource`] over an in-memory slice of settlements.
#[derive(Debug, Clone)]
pub struct InMemoryPayrollSource<'a> {
    records: &'a [PayrollRecord],
}

impl<'a> InMemoryPayrollSource<'a> {
    /// Wraps an already-fetched collection of payroll records.
    pub fn new(records: &'a [PayrollRecord]) -> Self {
        Self { records }
    }
}

impl PayrollSource for InMemoryPayrollSource<'_> {
    fn records_for(&self, employee_id: &str) -> EngineResult<Vec<PayrollRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

/// An [`EmployeeSource`] over an in-memory slice of snapshots.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeSource<'a> {
    employees: &'a [EmployeeSnapshot],
}

impl<'a> InMemoryEmployeeSource<'a> {
    /// Wraps an already-fetched roster.
    pub fn new(employees: &'a [EmployeeSnapshot]) -> Self {
        Self { employees }
    }
}

impl EmployeeSource for InMemoryEmployeeSource<'_> {
    fn employee(&self, employee_id: &str) -> EngineResult<Option<EmployeeSnapshot>> {
        Ok(self
            .employees
            .iter()
            .find(|employee| employee.id == employee_id)
            .cloned())
    }
}

/// Resolves which compensation applied to an employee in one calendar month.
///
/// Precedence, first match wins, evaluated against the first day of the
/// target period:
/// 1. The most recent history record effective on or before the target
///    (ties broken by latest creation timestamp): its new values,
///    [`SalarySource::HistoryNew`].
/// 2. Otherwise the earliest change effective after the target, if it
///    recorded prior-regime values: those values,
///    [`SalarySource::HistoryPrevious`].
/// 3. Otherwise the chronologically latest change regardless of date:
///    its new values, [`SalarySource::HistoryLatest`].
/// 4. With no history at all, the payroll settlement nearest the target
///    month, [`SalarySource::PayrollRecord`].
/// 5. Otherwise the employee's live compensation fields,
///    [`SalarySource::Current`].
/// 6. When every lookup fails or comes back empty, the all-zero
///    [`SalarySource::NotFound`] result.
///
/// Source failures are logged and treated as empty at their tier; this
/// function never returns an error.
pub fn resolve_salary_for_period(
    employee_id: &str,
    period: &Period,
    history: &impl SalaryHistorySource,
    payroll: &impl PayrollSource,
    employees: &impl EmployeeSource,
) -> SalaryForPeriodResult {
    let target_date = period.first_day();

    let history_records = history.history_for(employee_id).unwrap_or_else(|err| {
        warn!(employee_id, error = %err, "salary history lookup failed");
        Vec::new()
    });

    if !history_records.is_empty() {
        if let Some(record) = history_records
            .iter()
            .filter(|record| record.effective_date <= target_date)
            .max_by_key(|record| (record.effective_date, record.created_at))
        {
            return SalaryForPeriodResult {
                deposit_wage: record.deposit_wage,
                cash_wage: record.cash_wage,
                presentismo: record.presentismo,
                source: SalarySource::HistoryNew,
            };
        }

        // Every change is in the future. The earliest of them may carry a
        // snapshot of the regime that was in force before it.
        if let Some(record) = history_records
            .iter()
            .min_by_key(|record| (record.effective_date, record.created_at))
            .filter(|record| record.has_previous())
        {
            return SalaryForPeriodResult {
                deposit_wage: record.previous_deposit_wage.unwrap_or(Decimal::ZERO),
                cash_wage: record.previous_cash_wage.unwrap_or(Decimal::ZERO),
                presentismo: record.previous_presentismo.unwrap_or(Decimal::ZERO),
                source: SalarySource::HistoryPrevious,
            };
        }

        if let Some(record) = history_records
            .iter()
            .max_by_key(|record| (record.effective_date, record.created_at))
        {
            return SalaryForPeriodResult {
                deposit_wage: record.deposit_wage,
                cash_wage: record.cash_wage,
                presentismo: record.presentismo,
                source: SalarySource::HistoryLatest,
            };
        }
    }

    let payroll_records = payroll.records_for(employee_id).unwrap_or_else(|err| {
        warn!(employee_id, error = %err, "payroll lookup failed");
        Vec::new()
    });

    if let Some(record) = nearest_payroll_record(&payroll_records, period) {
        return SalaryForPeriodResult {
            deposit_wage: record.deposit_amount,
            cash_wage: record.cash_amount,
            presentismo: record.presentismo_amount,
            source: SalarySource::PayrollRecord,
        };
    }

    match employees.employee(employee_id) {
        Ok(Some(employee)) => SalaryForPeriodResult {
            deposit_wage: employee.deposit_wage,
            cash_wage: employee.cash_wage,
            presentismo: employee.presentismo,
            source: SalarySource::Current,
        },
        Ok(None) => SalaryForPeriodResult::not_found(),
        Err(err) => {
            warn!(employee_id, error = %err, "employee lookup failed");
            SalaryForPeriodResult::not_found()
        }
    }
}

/// Picks the settlement nearest a target month: the latest settlement on or
/// before it, else the earliest one after it.
fn nearest_payroll_record<'a>(
    records: &'a [PayrollRecord],
    period: &Period,
) -> Option<&'a PayrollRecord> {
    records
        .iter()
        .filter(|record| record.period <= *period)
        .max_by_key(|record| record.period)
        .or_else(|| {
            records
                .iter()
                .filter(|record| record.period > *period)
                .min_by_key(|record| record.period)
        })
}
