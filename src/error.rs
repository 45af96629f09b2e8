//! Error types for the payroll engine.
//!
//! Calculations themselves never fail; errors come from loading configuration,
//! from the debt ledger, and from the guarded settlement approval.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::DuplicateTaxDebt {
///     employee_id: "EMP001".to_string(),
///     year: 2024,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Employee 'EMP001' already has an open tax debt for 2024"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable rule set.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// The employee joined after the requested fiscal year.
    #[error("Employee '{employee_id}' has no eligible months in {year}")]
    NoEligibleMonths {
        /// The employee the settlement was requested for.
        employee_id: String,
        /// The requested fiscal year.
        year: i32,
    },

    /// The settlement difference is too small (or not owed) to open a debt.
    #[error("Settlement difference {difference} does not warrant a tax debt")]
    NegligibleDifference {
        /// The computed difference between correct tax and tax paid.
        difference: Decimal,
    },

    /// An open debt already exists for the employee and year.
    #[error("Employee '{employee_id}' already has an open tax debt for {year}")]
    DuplicateTaxDebt {
        /// The employee owning the open debt.
        employee_id: String,
        /// The fiscal year of the open debt.
        year: i32,
    },

    /// No debt with the given id exists in the ledger.
    #[error("Tax debt not found: {debt_id}")]
    TaxDebtNotFound {
        /// The id that was looked up.
        debt_id: String,
    },

    /// The ledger could not be accessed.
    #[error("Tax debt ledger unavailable: {message}")]
    LedgerUnavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
