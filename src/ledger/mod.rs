//! Settlement debt ledger.
//!
//! The [`TaxDebtRepository`] port is the only shared mutable state of the
//! engine. [`SettlementEngine`] previews and approves settlements against any
//! implementation of it; [`InMemoryTaxDebtLedger`] is the bundled adapter.

mod in_memory;
mod repository;
mod settlement_engine;

pub use in_memory::InMemoryTaxDebtLedger;
pub use repository::TaxDebtRepository;
pub use settlement_engine::{SettlementEngine, SettlementInputs};
