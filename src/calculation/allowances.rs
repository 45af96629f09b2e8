//! Allowance totals.

use rust_decimal::Decimal;

use crate::models::Allowances;

/// Allowance sums used by the payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceTotals {
    /// Every allowance, cash allowance included.
    pub total: Decimal,
    /// The cash allowance alone.
    pub cash: Decimal,
    /// Every allowance except the cash allowance; part of the insurable wage.
    pub non_cash: Decimal,
}

/// Sums an employee's allowances, separating the cash allowance.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_allowances;
/// use payroll_engine::models::Allowances;
/// use rust_decimal::Decimal;
///
/// let allowances = Allowances {
///     transportation: Decimal::from(500),
///     living_cost: Decimal::from(300),
///     cash_allowance: Decimal::from(150),
///     ..Allowances::default()
/// };
///
/// let totals = summarize_allowances(&allowances);
/// assert_eq!(totals.total, Decimal::from(950));
/// assert_eq!(totals.non_cash, Decimal::from(800));
/// ```
pub fn summarize_allowances(allowances: &Allowances) -> AllowanceTotals {
    let total: Decimal = allowances.entries().iter().map(|(_, amount)| *amount).sum();
    let cash = allowances.cash_allowance;

    AllowanceTotals {
        total,
        cash,
        non_cash: total - cash,
    }
}
