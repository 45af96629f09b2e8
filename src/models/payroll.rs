//! Payroll result models.
//!
//! This module contains the [`PayrollSlip`] produced for one employee and month,
//! the operator-entered [`OperatorAdjustments`] that feed it, and the
//! [`PayrollRun`] aggregate for a whole month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayrollPeriod, lenient};

/// Per-run scalars entered by the payroll operator. Not persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAdjustments {
    /// Ad-hoc incentive added to this month's pay.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub incentives: Decimal,
    /// Penalties deducted from this month's pay.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub penalties: Decimal,
    /// Overtime pay added to this month's pay.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_pay: Decimal,
}

/// A monthly payslip.
///
/// The slip is a derived snapshot recomputed on every invocation; it is never
/// the system of record. Every monetary field is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSlip {
    /// The employee the slip is for.
    pub employee_id: String,
    /// The month the slip is for.
    pub period: PayrollPeriod,

    /// Basic salary as entered.
    pub basic_salary: Decimal,
    /// Variable salary as entered.
    pub variable_salary: Decimal,
    /// Manually entered 2015 special raise.
    pub special_raise_2015: Decimal,
    /// Fixed labor grant.
    pub labor_grant: Decimal,
    /// Social package shown on the slip (living-cost allowance).
    pub social_package: Decimal,
    /// Manually entered syndicate incentive.
    pub syndicate_incentive: Decimal,
    /// Additional incentive from the job grade table.
    pub additional_incentive: Decimal,
    /// Education and experience bonus.
    pub education_experience_bonus: Decimal,
    /// Raise from the latest performance review.
    pub performance_raise: Decimal,
    /// Sum of all allowances, cash allowance included.
    pub allowances_total: Decimal,
    /// Cash allowance, excluded from the insurable wage.
    pub cash_allowance: Decimal,
    /// Insurable wage components before clamping to the insurance bounds.
    pub insurable_wage: Decimal,

    /// Employer share of social insurance.
    pub syndicate_social_share: Decimal,
    /// Employer half of the fellowship fund, excluded from gross.
    pub syndicate_fellowship_share: Decimal,
    /// Insurable wage + employer insurance share + cash allowance.
    pub gross_total: Decimal,

    /// Employee share of social insurance.
    pub insurance_employee_share: Decimal,
    /// Employee and employer insurance shares combined.
    pub total_insurance: Decimal,
    /// Monthly income tax withholding.
    pub tax_deduction: Decimal,
    /// Stamp duty.
    pub stamp_duty: Decimal,
    /// Employee half of the fellowship fund.
    pub fellowship_fund: Decimal,

    /// Operator incentive plus bonuses paid this month.
    pub incentives: Decimal,
    /// Operator penalties.
    pub penalties: Decimal,
    /// Overtime pay entered for this month.
    pub overtime_pay: Decimal,
    /// Loan installment deducted this month.
    pub loan_deduction: Decimal,
    /// Tax settlement installment deducted this month.
    pub tax_settlement_deduction: Decimal,
    /// Take-home pay.
    pub net_salary: Decimal,
}

/// Aggregated totals over every slip of a payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunTotals {
    /// Number of slips in the run.
    pub employee_count: usize,
    /// Sum of gross totals.
    pub gross_total: Decimal,
    /// Sum of employee and employer insurance.
    pub total_insurance: Decimal,
    /// Sum of tax withholdings.
    pub tax_deduction: Decimal,
    /// Sum of stamp duties.
    pub stamp_duty: Decimal,
    /// Sum of loan installments.
    pub loan_deduction: Decimal,
    /// Sum of settlement installments.
    pub tax_settlement_deduction: Decimal,
    /// Sum of net salaries.
    pub net_salary: Decimal,
}

/// The payslips of every employee for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// The month of the run.
    pub period: PayrollPeriod,
    /// One slip per employee, in input order.
    pub slips: Vec<PayrollSlip>,
    /// Totals over all slips.
    pub totals: PayrollRunTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustments_default_to_zero_when_missing() {
        let adjustments: OperatorAdjustments = serde_json::from_str("{}").unwrap();
        assert_eq!(adjustments, OperatorAdjustments::default());
    }

    #[test]
    fn test_adjustments_tolerate_blank_input() {
        let adjustments: OperatorAdjustments =
            serde_json::from_str(r#"{"incentives": "", "penalties": "50"}"#).unwrap();
        assert_eq!(adjustments.incentives, Decimal::ZERO);
        assert_eq!(adjustments.penalties, Decimal::from(50));
    }
}
