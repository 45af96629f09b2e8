//! Loan and settlement installment deductions.

use rust_decimal::Decimal;

use crate::models::{Loan, TaxDebt};

/// The loan installment due this month.
///
/// Only the employee's first active loan is considered. The installment never
/// exceeds the remaining balance. No active loan means no deduction.
pub fn loan_deduction(employee_id: &str, loans: &[Loan]) -> Decimal {
    loans
        .iter()
        .find(|loan| loan.employee_id == employee_id && loan.is_active())
        .map(Loan::next_installment)
        .unwrap_or(Decimal::ZERO)
}

/// The settlement installment due this month.
///
/// The first debt of the employee with a remaining balance is collected,
/// whatever year it was raised for.
pub fn settlement_deduction(employee_id: &str, debts: &[TaxDebt]) -> Decimal {
    debts
        .iter()
        .find(|debt| debt.employee_id == employee_id && debt.is_open())
        .map(TaxDebt::next_installment)
        .unwrap_or(Decimal::ZERO)
}
