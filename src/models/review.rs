//! Performance review model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// A yearly performance review.
///
/// Only the most recently dated review of an employee affects payroll, through
/// its suggested raise percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Unique identifier for the review.
    pub id: String,
    /// The reviewed employee.
    pub employee_id: String,
    /// The year under review.
    pub year: i32,
    /// Score out of 100.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub score: Decimal,
    /// Rating label (e.g., "Excellent").
    #[serde(default)]
    pub rating: Option<String>,
    /// Free-form reviewer notes.
    #[serde(default)]
    pub notes: String,
    /// Suggested raise as a percentage of basic salary.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub suggested_raise: Decimal,
    /// The date the review was recorded.
    pub date: NaiveDate,
}
