//! Core data models for the payroll engine.
//!
//! Input records (employees, loans, reviews, bonuses, tax debts) are owned by
//! external collaborators and read-only here; payslips and settlement
//! statements are derived snapshots.

mod bonus;
mod employee;
pub mod lenient;
mod loan;
mod payroll;
mod period;
mod review;
mod settlement;
mod tax_debt;

pub use bonus::{BonusCategory, BonusRecord};
pub use employee::{Allowances, EducationLevel, Employee};
pub use loan::{Loan, LoanStatus};
pub use payroll::{OperatorAdjustments, PayrollRun, PayrollRunTotals, PayrollSlip};
pub use period::PayrollPeriod;
pub use review::PerformanceReview;
pub use settlement::{SettlementPreview, SettlementStatement, SettlementStatus};
pub use tax_debt::TaxDebt;
