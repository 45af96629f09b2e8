//! Payroll period model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar month a payroll run is computed for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod::new(2024, 5);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap()));
/// ```
///
/// Deserialization rejects months outside 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPayrollPeriod")]
pub struct PayrollPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 through 12.
    pub month: u32,
}

#[derive(Deserialize)]
struct RawPayrollPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPayrollPeriod> for PayrollPeriod {
    type Error = String;

    fn try_from(raw: RawPayrollPeriod) -> Result<Self, Self::Error> {
        if (1..=12).contains(&raw.month) {
            Ok(Self::new(raw.year, raw.month))
        } else {
            Err(format!(
                "month {} is out of range, expected 1 through 12",
                raw.month
            ))
        }
    }
}

impl PayrollPeriod {
    /// Creates a period for the given year and month.
    ///
    /// The month is not checked; callers pass 1 through 12.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the period containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Checks whether a date falls within this period's calendar month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_uses_year_and_month() {
        let period = PayrollPeriod::containing(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(period, PayrollPeriod::new(2024, 2));
    }

    #[test]
    fn test_deserialize_valid_month() {
        let period: PayrollPeriod = serde_json::from_str(r#"{"year": 2024, "month": 12}"#).unwrap();
        assert_eq!(period, PayrollPeriod::new(2024, 12));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_months() {
        for month in [0, 13] {
            let json = format!(r#"{{"year": 2024, "month": {}}}"#, month);
            let err = serde_json::from_str::<PayrollPeriod>(&json).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", err);
        }
    }

    #[test]
    fn test_deserialize_requires_month() {
        let err = serde_json::from_str::<PayrollPeriod>(r#"{"year": 2024}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `month`"));
    }

    #[test]
    fn test_contains_first_and_last_day() {
        let period = PayrollPeriod::new(2024, 12);
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()));
    }
}
