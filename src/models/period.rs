//! Calendar period (`YYYY-MM`) value object.
//!
//! Payroll records are settled per calendar month, addressed by a `YYYY-MM`
//! token. Parsing happens once at the ingestion boundary; the calculation
//! modules only ever see an already-validated [`Period`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A calendar month identified by year and month.
///
/// Serialized as the `"YYYY-MM"` token used throughout payroll data, so a
/// malformed period is rejected when the record is deserialized, never later
/// inside a calculation.
///
/// # Example
///
/// ```
/// use sac_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period: Period = "2024-03".parse().unwrap();
/// assert_eq!(period.year(), 2024);
/// assert_eq!(period.month(), 3);
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(period.to_string(), "2024-03");
///
/// assert!("2024-13".parse::<Period>().is_err());
/// assert!("marzo".parse::<Period>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period, returning `None` unless the year/month combination
    /// denotes a representable calendar month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    ///
    /// Payroll periods are interpreted as their first day when compared
    /// against date ranges such as a semester window.
    pub fn first_day(&self) -> NaiveDate {
        // The constructor guarantees the month is representable.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod {
            token: s.to_string(),
        };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
