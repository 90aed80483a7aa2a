//! Salary-change history record model.
//!
//! Each record captures one point-in-time compensation change: the regime
//! that starts at `effective_date`, and a snapshot of the regime that ended
//! there. The `previous_*` fields describe what was in force immediately
//! before the change, not the new values.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// One compensation change in an employee's salary history.
///
/// # Example
///
/// ```
/// use sac_engine::models::SalaryHistoryRecord;
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let change = SalaryHistoryRecord {
///     employee_id: "emp_001".to_string(),
///     effective_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     impact_period: Some("2024-04".parse().unwrap()),
///     deposit_wage: Decimal::from(90_000),
///     cash_wage: Decimal::from(30_000),
///     presentismo: Decimal::from(5_000),
///     previous_deposit_wage: Some(Decimal::from(80_000)),
///     previous_cash_wage: Some(Decimal::from(25_000)),
///     previous_presentismo: None,
///     created_at: Utc.with_ymd_and_hms(2024, 3, 28, 12, 0, 0).unwrap(),
/// };
/// assert!(change.has_previous());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryHistoryRecord {
    /// The employee whose compensation changed.
    pub employee_id: String,
    /// The date the new regime takes effect.
    pub effective_date: NaiveDate,
    /// The first payroll period the change impacts, when recorded.
    #[serde(default)]
    pub impact_period: Option<Period>,
    /// The new bank-deposited monthly wage.
    #[serde(default)]
    pub deposit_wage: Decimal,
    /// The new informally paid monthly wage.
    #[serde(default)]
    pub cash_wage: Decimal,
    /// The new monthly attendance bonus.
    #[serde(default)]
    pub presentismo: Decimal,
    /// The deposited wage in force until `effective_date`, when recorded.
    #[serde(default)]
    pub previous_deposit_wage: Option<Decimal>,
    /// The cash wage in force until `effective_date`, when recorded.
    #[serde(default)]
    pub previous_cash_wage: Option<Decimal>,
    /// The attendance bonus in force until `effective_date`, when recorded.
    #[serde(default)]
    pub previous_presentismo: Option<Decimal>,
    /// When this change was recorded. Breaks ties between changes sharing
    /// an effective date.
    pub created_at: DateTime<Utc>,
}

impl SalaryHistoryRecord {
    /// Whether any prior-regime value was recorded on this change.
    pub fn has_previous(&self) -> bool {
        self.previous_deposit_wage.is_some()
            || self.previous_cash_wage.is_some()
            || self.previous_presentismo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_record() -> SalaryHistoryRecord {
        SalaryHistoryRecord {
            employee_id: "emp_001".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            impact_period: Some("2024-04".parse().unwrap()),
            deposit_wage: Decimal::from(90_000),
            cash_wage: Decimal::from(30_000),
            presentismo: Decimal::from(5_000),
            previous_deposit_wage: Some(Decimal::from(80_000)),
            previous_cash_wage: Some(Decimal::from(25_000)),
            previous_presentismo: Some(Decimal::from(4_000)),
            created_at: Utc.with_ymd_and_hms(2024, 3, 28, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_has_previous_with_all_fields() {
        assert!(create_test_record().has_previous());
    }

    #[test]
    fn test_has_previous_with_single_field() {
        let mut record = create_test_record();
        record.previous_deposit_wage = None;
        record.previous_cash_wage = None;
        assert!(record.has_previous());
    }

    #[test]
    fn test_has_previous_with_no_fields() {
        let mut record = create_test_record();
        record.previous_deposit_wage = None;
        record.previous_cash_wage = None;
        record.previous_presentismo = None;
        assert!(!record.has_previous());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "effective_date": "2024-04-01",
            "deposit_wage": "90000",
            "created_at": "2024-03-28T12:00:00Z"
        }"#;

        let record: SalaryHistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.impact_period, None);
        assert_eq!(record.cash_wage, Decimal::ZERO);
        assert_eq!(record.previous_deposit_wage, None);
        assert!(!record.has_previous());
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: SalaryHistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
