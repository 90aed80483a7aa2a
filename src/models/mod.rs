//! Core data models for the SAC Calculation Engine.
//!
//! This module contains all the domain records and result value objects
//! used throughout the engine.

mod calculation_result;
mod employee;
mod payroll_record;
mod period;
mod salary_history;
mod semester;

pub use calculation_result::{BonusResult, SalaryForPeriodResult, SalarySource};
pub use employee::EmployeeSnapshot;
pub use payroll_record::PayrollRecord;
pub use period::Period;
pub use salary_history::SalaryHistoryRecord;
pub use semester::SemesterWindow;
