//! Request types for the payroll engine API.
//!
//! Record collections default to empty and operator scalars default to zero,
//! so a request only needs the employee (and the year for settlements).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::BonusBasis;
use crate::models::{
    BonusCategory, BonusRecord, Employee, Loan, OperatorAdjustments, PayrollPeriod,
    PerformanceReview, lenient,
};

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to pay.
    pub employee: Employee,
    /// The month to pay; the current month when absent.
    #[serde(default)]
    pub period: Option<PayrollPeriod>,
    /// Loans of the employee.
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Performance reviews of the employee.
    #[serde(default)]
    pub reviews: Vec<PerformanceReview>,
    /// Bonus records of the employee.
    #[serde(default)]
    pub bonuses: Vec<BonusRecord>,
    /// Operator incentive for the month.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub incentives: Decimal,
    /// Operator penalties for the month.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub penalties: Decimal,
    /// Overtime pay for the month.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_pay: Decimal,
}

impl PayrollRequest {
    /// The operator scalars of the request.
    pub fn adjustments(&self) -> OperatorAdjustments {
        OperatorAdjustments {
            incentives: self.incentives,
            penalties: self.penalties,
            overtime_pay: self.overtime_pay,
        }
    }
}

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// Every employee to pay.
    pub employees: Vec<Employee>,
    /// The month to pay; the current month when absent.
    #[serde(default)]
    pub period: Option<PayrollPeriod>,
    /// Loans of any employee.
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Performance reviews of any employee.
    #[serde(default)]
    pub reviews: Vec<PerformanceReview>,
    /// Bonus records of any employee.
    #[serde(default)]
    pub bonuses: Vec<BonusRecord>,
    /// Operator scalars keyed by employee id.
    #[serde(default)]
    pub adjustments: HashMap<String, OperatorAdjustments>,
}

/// Request body for `POST /settlements/preview` and `POST /settlements/approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The employee to settle.
    pub employee: Employee,
    /// The fiscal year.
    pub year: i32,
    /// Performance reviews of the employee.
    #[serde(default)]
    pub reviews: Vec<PerformanceReview>,
    /// Bonus records of the employee.
    #[serde(default)]
    pub bonuses: Vec<BonusRecord>,
}

/// Request body for `POST /bonuses/issue`.
///
/// The gross is given either as `{"basis": "fixed", "amount": ...}` or as
/// `{"basis": "overtime", "standard_hours": ..., "rest_day_hours": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusIssueRequest {
    /// The paid employee.
    pub employee: Employee,
    /// Free-form label of the payment.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Bonus, grant or overtime.
    #[serde(default)]
    pub category: BonusCategory,
    /// How the gross is determined.
    #[serde(flatten)]
    pub basis: BonusBasis,
    /// Tax rate, as a percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tax_rate: Decimal,
    /// The date the payment is due.
    pub date: NaiveDate,
}

/// Request body for `POST /installments/:debt_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentRequest {
    /// The amount collected.
    #[serde(deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
}
