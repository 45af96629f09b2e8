//! Calculation logic for the payroll engine.
//!
//! This module contains the progressive income tax table, the steps of the
//! monthly payslip (allowances, incentives, insurance, deductions), the
//! payslip and payroll run themselves, the annual settlement statement, and
//! bonus record issuance.

mod allowances;
mod bonus_issue;
mod deductions;
mod incentives;
mod insurance;
mod payroll;
mod rounding;
mod settlement;
mod tax_brackets;

#[cfg(test)]
pub(crate) mod fixtures;

pub use allowances::{AllowanceTotals, summarize_allowances};
pub use bonus_issue::{BonusBasis, issue_bonus, overtime_gross};
pub use deductions::{loan_deduction, settlement_deduction};
pub use incentives::{
    IncentiveBreakdown, calculate_incentives, education_experience_bonus, latest_review,
    monthly_bonus_total,
};
pub use insurance::{InsuranceContributions, calculate_insurance};
pub use payroll::{PayrollContext, calculate_payroll, calculate_payroll_run};
pub use rounding::{ceil_to_cent, floor_to_unit, round_money};
pub use settlement::{calculate_settlement, months_worked};
pub use tax_brackets::calculate_annual_tax;
