//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::ledger::InMemoryTaxDebtLedger;

/// Shared application state.
///
/// Contains the loaded statutory configuration and the tax debt ledger.
/// Clones share both.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    ledger: InMemoryTaxDebtLedger,
}

impl AppState {
    /// Creates a new application state with an empty ledger.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_ledger(config, InMemoryTaxDebtLedger::new())
    }

    /// Creates a new application state over an existing ledger.
    pub fn with_ledger(config: ConfigLoader, ledger: InMemoryTaxDebtLedger) -> Self {
        Self {
            config: Arc::new(config),
            ledger,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the tax debt ledger.
    pub fn ledger(&self) -> &InMemoryTaxDebtLedger {
        &self.ledger
    }
}
