//! Tax debt model.
//!
//! A [`TaxDebt`] is opened when an operator approves an annual settlement in
//! which the employee owes tax, and is collected through payroll until its
//! remaining amount reaches zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lenient;

/// An installment plan recovering under-withheld tax for one fiscal year.
///
/// At most one debt per (employee, year) may be open at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDebt {
    /// Unique identifier for the debt (e.g., "TAX-<uuid>").
    pub id: String,
    /// The indebted employee.
    pub employee_id: String,
    /// The fiscal year the debt settles.
    pub year: i32,
    /// The approved settlement difference.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_amount: Decimal,
    /// The amount still to be collected.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub remaining_amount: Decimal,
    /// The fixed monthly installment.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub monthly_installment: Decimal,
    /// When the settlement was approved.
    pub created_at: DateTime<Utc>,
}

impl TaxDebt {
    /// Opens a new debt with the full amount remaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TaxDebt;
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let debt = TaxDebt::open("EMP001", 2024, Decimal::new(99396, 2), Decimal::new(8283, 2), Utc::now());
    /// assert!(debt.is_open());
    /// assert!(debt.id.starts_with("TAX-"));
    /// assert_eq!(debt.remaining_amount, debt.total_amount);
    /// ```
    pub fn open(
        employee_id: impl Into<String>,
        year: i32,
        amount: Decimal,
        monthly_installment: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("TAX-{}", Uuid::new_v4()),
            employee_id: employee_id.into(),
            year,
            total_amount: amount,
            remaining_amount: amount,
            monthly_installment,
            created_at,
        }
    }

    /// Returns true while an amount remains to be collected.
    pub fn is_open(&self) -> bool {
        self.remaining_amount > Decimal::ZERO
    }

    /// The amount to deduct this month: the installment, never more than what remains.
    pub fn next_installment(&self) -> Decimal {
        self.monthly_installment.min(self.remaining_amount)
    }
}
