//! Employee loan model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Whether a loan is still being repaid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Installments are still deducted from payroll.
    #[default]
    Active,
    /// Fully repaid.
    Completed,
}

/// A salary advance repaid through fixed monthly installments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for the loan.
    pub id: String,
    /// The borrowing employee.
    pub employee_id: String,
    /// The original loan amount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_amount: Decimal,
    /// The amount still outstanding.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub remaining_amount: Decimal,
    /// The fixed monthly installment.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub monthly_installment: Decimal,
    /// When repayment started.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Repayment status.
    #[serde(default)]
    pub status: LoanStatus,
}

impl Loan {
    /// Returns true while the loan is being repaid.
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// The amount to deduct this month: the installment, never more than what remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Loan, LoanStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let loan = Loan {
    ///     id: "LN001".to_string(),
    ///     employee_id: "EMP001".to_string(),
    ///     total_amount: Decimal::from(10000),
    ///     remaining_amount: Decimal::from(600),
    ///     monthly_installment: Decimal::from(1000),
    ///     start_date: None,
    ///     status: LoanStatus::Active,
    /// };
    /// assert_eq!(loan.next_installment(), Decimal::from(600));
    /// ```
    pub fn next_installment(&self) -> Decimal {
        self.monthly_installment.min(self.remaining_amount)
    }
}
