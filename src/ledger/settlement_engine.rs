//! Settlement preview and approval against a debt repository.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::calculation::{calculate_settlement, round_money};
use crate::config::StatutoryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BonusRecord, Employee, PerformanceReview, SettlementPreview, SettlementStatus, TaxDebt,
};

use super::repository::TaxDebtRepository;

/// The records a settlement is computed from.
#[derive(Debug, Clone, Copy)]
pub struct SettlementInputs<'a> {
    /// The employee to settle.
    pub employee: &'a Employee,
    /// The fiscal year.
    pub year: i32,
    /// Performance reviews, of any employee.
    pub reviews: &'a [PerformanceReview],
    /// Bonus records, of any employee and year.
    pub bonuses: &'a [BonusRecord],
}

/// Computes settlements and registers approved installment plans.
pub struct SettlementEngine<'a, R: TaxDebtRepository> {
    config: &'a StatutoryConfig,
    ledger: &'a R,
}

impl<'a, R: TaxDebtRepository> SettlementEngine<'a, R> {
    /// Creates an engine over the given rules and debt repository.
    pub fn new(config: &'a StatutoryConfig, ledger: &'a R) -> Self {
        Self { config, ledger }
    }

    /// Computes the statement and looks up the debt already open for the year.
    ///
    /// The statement is `None` when the employee has no eligible month in the
    /// year.
    pub fn preview(&self, inputs: &SettlementInputs<'_>) -> EngineResult<SettlementPreview> {
        let statement = calculate_settlement(
            inputs.employee,
            inputs.year,
            inputs.reviews,
            inputs.bonuses,
            self.config,
        );
        let existing_debt = self.ledger.find_open_debt(&inputs.employee.id, inputs.year)?;

        Ok(SettlementPreview {
            statement,
            existing_debt,
        })
    }

    /// Recomputes the statement and, when tax is owed, opens a debt for it.
    ///
    /// # Errors
    ///
    /// - `NoEligibleMonths` if the employee joined after the year
    /// - `NegligibleDifference` if nothing meaningful is owed
    /// - `DuplicateTaxDebt` if a debt for the year is still open
    pub fn approve(
        &self,
        inputs: &SettlementInputs<'_>,
        now: DateTime<Utc>,
    ) -> EngineResult<TaxDebt> {
        let employee_id = &inputs.employee.id;

        let Some(statement) = calculate_settlement(
            inputs.employee,
            inputs.year,
            inputs.reviews,
            inputs.bonuses,
            self.config,
        ) else {
            warn!(employee_id = %employee_id, year = inputs.year, "Settlement refused: no eligible months");
            return Err(EngineError::NoEligibleMonths {
                employee_id: employee_id.clone(),
                year: inputs.year,
            });
        };

        let installment = match (statement.status, statement.proposed_installment) {
            (SettlementStatus::Owed, Some(installment)) => installment,
            _ => {
                warn!(
                    employee_id = %employee_id,
                    year = inputs.year,
                    difference = %statement.difference,
                    "Settlement refused: no amount owed"
                );
                return Err(EngineError::NegligibleDifference {
                    difference: statement.difference,
                });
            }
        };

        let debt = TaxDebt::open(
            employee_id.clone(),
            inputs.year,
            round_money(statement.difference),
            installment,
            now,
        );

        if let Err(err) = self.ledger.append(debt.clone()) {
            warn!(employee_id = %employee_id, year = inputs.year, error = %err, "Settlement refused");
            return Err(err);
        }

        info!(
            employee_id = %employee_id,
            year = inputs.year,
            debt_id = %debt.id,
            amount = %debt.total_amount,
            monthly_installment = %debt.monthly_installment,
            "Settlement approved"
        );
        Ok(debt)
    }
}
