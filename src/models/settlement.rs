//! Annual tax settlement models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxDebt;

/// The outcome of comparing tax owed with tax withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// The employee owes tax; an installment plan may be approved.
    Owed,
    /// The employee overpaid. Reported only; there is no automatic refund.
    Overpaid,
    /// The difference is negligible.
    Settled,
}

/// The annual reconciliation of one employee's income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementStatement {
    /// The employee being settled.
    pub employee_id: String,
    /// The fiscal year.
    pub year: i32,
    /// Months of the year the employee was on payroll.
    pub months_worked: u32,
    /// First eligible month, 1 through 12.
    pub start_month: u32,

    /// Regular taxable gross for the eligible months.
    pub annual_regular_gross: Decimal,
    /// Gross of bonuses dated in the year.
    pub annual_bonus_gross: Decimal,
    /// Regular plus bonus gross.
    pub total_annual_gross: Decimal,

    /// Employee insurance share for the eligible months.
    pub annual_insurance: Decimal,
    /// Payroll and bonus stamp duty.
    pub annual_stamp: Decimal,
    /// Employee fellowship share for the eligible months.
    pub annual_fellowship: Decimal,
    /// Personal exemption prorated by months worked.
    pub personal_exemption: Decimal,
    /// Sum of all deductions and the exemption.
    pub total_deductions: Decimal,

    /// Taxable income after flooring to the rounding unit.
    pub taxable_income: Decimal,
    /// Tax legally owed for the year.
    pub correct_annual_tax: Decimal,
    /// Tax withheld through payroll and bonuses.
    pub tax_paid: Decimal,
    /// Correct tax minus tax paid. Positive means the employee owes.
    pub difference: Decimal,
    /// Reconciliation outcome.
    pub status: SettlementStatus,
    /// Monthly installment proposed when the employee owes tax.
    pub proposed_installment: Option<Decimal>,
}

/// A settlement statement alongside the debt already approved for it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPreview {
    /// The statement, or `None` when the employee has no eligible months.
    pub statement: Option<SettlementStatement>,
    /// The open debt for the same employee and year.
    pub existing_debt: Option<TaxDebt>,
}
