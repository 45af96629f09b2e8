//! In-memory tax debt ledger.

use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{EngineError, EngineResult};
use crate::models::TaxDebt;

use super::repository::TaxDebtRepository;

/// A thread-safe in-memory store for tax debts.
///
/// Uses `Arc<RwLock<Vec<TaxDebt>>>` so clones share the same ledger. The
/// duplicate check of [`append`](TaxDebtRepository::append) runs under the
/// write lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaxDebtLedger {
    debts: Arc<RwLock<Vec<TaxDebt>>>,
}

impl InMemoryTaxDebtLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding the given debts.
    pub fn with_debts(debts: Vec<TaxDebt>) -> Self {
        Self {
            debts: Arc::new(RwLock::new(debts)),
        }
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Vec<TaxDebt>>> {
        self.debts.read().map_err(|err| EngineError::LedgerUnavailable {
            message: err.to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Vec<TaxDebt>>> {
        self.debts.write().map_err(|err| EngineError::LedgerUnavailable {
            message: err.to_string(),
        })
    }
}

impl TaxDebtRepository for InMemoryTaxDebtLedger {
    fn find_open_debt(&self, employee_id: &str, year: i32) -> EngineResult<Option<TaxDebt>> {
        let debts = self.read()?;
        Ok(debts
            .iter()
            .find(|debt| debt.employee_id == employee_id && debt.year == year && debt.is_open())
            .cloned())
    }

    fn append(&self, debt: TaxDebt) -> EngineResult<()> {
        let mut debts = self.write()?;

        let duplicate = debts.iter().any(|existing| {
            existing.employee_id == debt.employee_id && existing.year == debt.year && existing.is_open()
        });
        if duplicate {
            return Err(EngineError::DuplicateTaxDebt {
                employee_id: debt.employee_id,
                year: debt.year,
            });
        }

        debts.push(debt);
        Ok(())
    }

    fn debts_for_employee(&self, employee_id: &str) -> EngineResult<Vec<TaxDebt>> {
        let debts = self.read()?;
        Ok(debts
            .iter()
            .filter(|debt| debt.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn all_debts(&self) -> EngineResult<Vec<TaxDebt>> {
        Ok(self.read()?.clone())
    }

    fn record_installment(&self, debt_id: &str, amount: Decimal) -> EngineResult<TaxDebt> {
        let mut debts = self.write()?;
        let debt = debts
            .iter_mut()
            .find(|debt| debt.id == debt_id)
            .ok_or_else(|| EngineError::TaxDebtNotFound {
                debt_id: debt_id.to_string(),
            })?;

        let collected = amount.max(Decimal::ZERO).min(debt.remaining_amount);
        debt.remaining_amount -= collected;
        Ok(debt.clone())
    }
}
