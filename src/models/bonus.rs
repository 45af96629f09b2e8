//! Bonus, grant and overtime payment records.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// The kind of one-off payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    /// A discretionary bonus (e.g., exceptional effort).
    #[default]
    Bonus,
    /// An occasional grant (e.g., a holiday grant).
    Grant,
    /// Overtime hours paid as a one-off amount.
    Overtime,
}

/// A one-off payment with its own tax and stamp withholding.
///
/// Records dated in the payroll month feed that month's incentives; all records
/// of a fiscal year feed the annual settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The paid employee.
    pub employee_id: String,
    /// Free-form label (e.g., "exceptional effort").
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The category of payment.
    #[serde(default)]
    pub category: BonusCategory,
    /// Legacy gross amount, used when `gross_amount` is absent.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
    /// Gross amount before withholding.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub gross_amount: Decimal,
    /// Tax rate applied, as a percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tax_rate: Decimal,
    /// Tax withheld on this payment.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tax_amount: Decimal,
    /// Stamp duty withheld on this payment.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub stamp_amount: Decimal,
    /// Amount paid out after withholding.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub net_amount: Decimal,
    /// The date the payment is due.
    pub date: NaiveDate,
    /// Optional details (e.g., overtime hours).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl BonusRecord {
    /// The gross value of the payment: `gross_amount`, or `amount` when that is zero.
    pub fn effective_gross(&self) -> Decimal {
        if self.gross_amount.is_zero() {
            self.amount
        } else {
            self.gross_amount
        }
    }

    /// Returns true if the record is dated in the given calendar year.
    pub fn is_in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }
}
