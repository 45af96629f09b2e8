//! HTTP API module for the payroll engine.
//!
//! This module exposes payslip and payroll run calculation, settlement
//! preview and approval, bonus issuance and the tax debt ledger over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BonusIssueRequest, InstallmentRequest, PayrollRequest, PayrollRunRequest, SettlementRequest,
};
pub use response::ApiError;
pub use state::AppState;
