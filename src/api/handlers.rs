//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollContext, calculate_payroll, calculate_payroll_run, issue_bonus};
use crate::error::EngineError;
use crate::ledger::{SettlementEngine, SettlementInputs, TaxDebtRepository};
use crate::models::PayrollPeriod;

use super::request::{
    BonusIssueRequest, InstallmentRequest, PayrollRequest, PayrollRunRequest, SettlementRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/payroll/run", post(payroll_run_handler))
        .route("/settlements/preview", post(preview_settlement_handler))
        .route("/settlements/approve", post(approve_settlement_handler))
        .route("/bonuses/issue", post(issue_bonus_handler))
        .route("/tax-debts/:employee_id", get(list_tax_debts_handler))
        .route("/installments/:debt_id", post(record_installment_handler))
        .with_state(state)
}

/// Serializes a body as a JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts an engine error into its JSON error response.
fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Converts a JSON body rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("out of range") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// The period of a request, defaulting to the current month.
fn resolve_period(period: Option<PayrollPeriod>) -> PayrollPeriod {
    period.unwrap_or_else(|| PayrollPeriod::containing(Utc::now().date_naive()))
}

/// Handler for POST /payroll/calculate.
///
/// Computes one payslip. Open settlement debts are read from the ledger.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tax_debts = match state.ledger().debts_for_employee(&request.employee.id) {
        Ok(debts) => debts,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Ledger read failed");
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let context = PayrollContext {
        period: resolve_period(request.period),
        loans: &request.loans,
        reviews: &request.reviews,
        bonuses: &request.bonuses,
        tax_debts: &tax_debts,
    };
    let slip = calculate_payroll(
        &request.employee,
        &context,
        &request.adjustments(),
        state.config().config(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %slip.employee_id,
        gross_total = %slip.gross_total,
        net_salary = %slip.net_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );
    json_response(StatusCode::OK, slip)
}

/// Handler for POST /payroll/run.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tax_debts = match state.ledger().all_debts() {
        Ok(debts) => debts,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Ledger read failed");
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let context = PayrollContext {
        period: resolve_period(request.period),
        loans: &request.loans,
        reviews: &request.reviews,
        bonuses: &request.bonuses,
        tax_debts: &tax_debts,
    };
    let run = calculate_payroll_run(
        &request.employees,
        &context,
        &request.adjustments,
        state.config().config(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_count = run.totals.employee_count,
        gross_total = %run.totals.gross_total,
        net_salary = %run.totals.net_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll run calculated"
    );
    json_response(StatusCode::OK, run)
}

/// Handler for POST /settlements/preview.
async fn preview_settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement preview");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let engine = SettlementEngine::new(state.config().config(), state.ledger());
    let inputs = SettlementInputs {
        employee: &request.employee,
        year: request.year,
        reviews: &request.reviews,
        bonuses: &request.bonuses,
    };

    match engine.preview(&inputs) {
        Ok(preview) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                year = request.year,
                difference = ?preview.statement.as_ref().map(|s| s.difference),
                has_open_debt = preview.existing_debt.is_some(),
                "Settlement previewed"
            );
            json_response(StatusCode::OK, preview)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Settlement preview failed");
            error_response(err)
        }
    }
}

/// Handler for POST /settlements/approve.
///
/// Returns 201 with the new debt, or an advisory error.
async fn approve_settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement approval");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let engine = SettlementEngine::new(state.config().config(), state.ledger());
    let inputs = SettlementInputs {
        employee: &request.employee,
        year: request.year,
        reviews: &request.reviews,
        bonuses: &request.bonuses,
    };

    match engine.approve(&inputs, Utc::now()) {
        Ok(debt) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %debt.employee_id,
                debt_id = %debt.id,
                "Tax debt opened"
            );
            json_response(StatusCode::CREATED, debt)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Settlement approval rejected");
            error_response(err)
        }
    }
}

/// Handler for POST /bonuses/issue.
async fn issue_bonus_handler(
    State(state): State<AppState>,
    payload: Result<Json<BonusIssueRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus issue request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let record = issue_bonus(
        &request.employee,
        &request.kind,
        request.category,
        &request.basis,
        request.tax_rate,
        request.date,
        state.config().config().bonuses(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %record.employee_id,
        gross_amount = %record.gross_amount,
        net_amount = %record.net_amount,
        "Bonus issued"
    );
    json_response(StatusCode::CREATED, record)
}

/// Handler for GET /tax-debts/:employee_id.
async fn list_tax_debts_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    match state.ledger().debts_for_employee(&employee_id) {
        Ok(debts) => json_response(StatusCode::OK, debts),
        Err(err) => {
            warn!(employee_id = %employee_id, error = %err, "Ledger read failed");
            error_response(err)
        }
    }
}

/// Handler for POST /installments/:debt_id.
///
/// Records an installment collected by payroll and returns the updated debt.
async fn record_installment_handler(
    State(state): State<AppState>,
    Path(debt_id): Path<String>,
    payload: Result<Json<InstallmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.ledger().record_installment(&debt_id, request.amount) {
        Ok(debt) => {
            info!(
                correlation_id = %correlation_id,
                debt_id = %debt.id,
                remaining_amount = %debt.remaining_amount,
                "Installment recorded"
            );
            json_response(StatusCode::OK, debt)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Installment rejected");
            error_response(err)
        }
    }
}
