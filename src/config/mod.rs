//! Configuration loading and management for the payroll engine.
//!
//! This module loads the statutory rules (insurance bounds and rates, payslip
//! rules, tax brackets, the job grade table) from YAML files.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/egypt").unwrap();
//! println!("Loaded rules: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BonusRules, GradesFile, InsuranceRules, JobGrade, PayrollRules, RegimeMetadata,
    SettlementRules, StatutoryConfig, StatutoryFile, TaxBracket, TaxRules,
};

/// Loads the shipped Egyptian rules for unit tests.
#[cfg(test)]
pub(crate) fn test_config() -> StatutoryConfig {
    ConfigLoader::load("./config/egypt")
        .expect("Failed to load config")
        .config()
        .clone()
}
