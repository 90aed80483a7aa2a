//! HTTP API module for the SAC Calculation Engine.
//!
//! This module provides the REST surface consumed by report and export
//! collaborators: bonus determination and salary-for-period resolution.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{BonusCalculationRequest, SalaryForPeriodRequest};
pub use response::{ApiError, BonusResponse, SalaryForPeriodResponse};
