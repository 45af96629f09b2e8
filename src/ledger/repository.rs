//! The tax debt repository port.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::TaxDebt;

/// Storage for settlement debts.
///
/// Implementations must keep at most one open debt per (employee, year):
/// [`append`](TaxDebtRepository::append) checks for an open debt and stores the
/// new one as a single atomic step.
pub trait TaxDebtRepository: Send + Sync {
    /// Returns the open debt of an employee for a fiscal year, if any.
    fn find_open_debt(&self, employee_id: &str, year: i32) -> EngineResult<Option<TaxDebt>>;

    /// Stores a new debt.
    ///
    /// Fails with `DuplicateTaxDebt` when the employee already has an open debt
    /// for the same year.
    fn append(&self, debt: TaxDebt) -> EngineResult<()>;

    /// Returns every debt of an employee, open or paid off, in creation order.
    fn debts_for_employee(&self, employee_id: &str) -> EngineResult<Vec<TaxDebt>>;

    /// Returns every stored debt.
    fn all_debts(&self) -> EngineResult<Vec<TaxDebt>>;

    /// Records a collected installment against a debt.
    ///
    /// The remaining amount decreases by `min(amount, remaining)`. Returns the
    /// updated debt, or `TaxDebtNotFound`.
    fn record_installment(&self, debt_id: &str, amount: Decimal) -> EngineResult<TaxDebt>;
}
