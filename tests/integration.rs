//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers:
//! - Monthly payslips (statutory scenario, full profile, lenient inputs)
//! - Payroll runs
//! - Settlement preview, approval and the duplicate guard
//! - Collection of approved debts through payroll and installments
//! - Bonus issuance
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::ledger::InMemoryTaxDebtLedger;
use payroll_engine::models::TaxDebt;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/egypt").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_money(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("expected a decimal string, got {}", value));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

fn grade_1a_employee(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Ahmed Mohamed Ali",
        "grade": "1A",
        "basic_salary": "4000",
        "join_date": "2019-03-01"
    })
}

fn may_2024() -> Value {
    json!({"year": 2024, "month": 5})
}

/// A 2023 settlement where an untaxed 10,000 bonus leaves 993.96 owed.
fn owed_settlement(employee_id: &str) -> Value {
    json!({
        "employee": grade_1a_employee(employee_id),
        "year": 2023,
        "bonuses": [{
            "id": "BNS-2023-07",
            "employee_id": employee_id,
            "type": "exceptional effort",
            "category": "bonus",
            "gross_amount": "10000",
            "tax_amount": "0",
            "stamp_amount": "60",
            "date": "2023-07-01"
        }]
    })
}

// =============================================================================
// Payslips
// =============================================================================

#[tokio::test]
async fn test_payslip_grade_1a_scenario() {
    let (status, slip) = post(
        create_router_for_test(),
        "/payroll/calculate",
        json!({"employee": grade_1a_employee("EMP001"), "period": may_2024()}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(slip["employee_id"], "EMP001");
    assert_money(&slip["insurable_wage"], "5810");
    assert_money(&slip["insurance_employee_share"], "639.10");
    assert_money(&slip["syndicate_social_share"], "1089.38");
    assert_money(&slip["gross_total"], "6899.38");
    assert_money(&slip["stamp_duty"], "41.40");
    assert_money(&slip["tax_deduction"], "12.92");
    assert_money(&slip["net_salary"], "5116.59");
}

#[tokio::test]
async fn test_payslip_full_profile() {
    let body = json!({
        "employee": {
            "id": "EMP010",
            "name": "Mona Hassan",
            "grade": "2A",
            "education_level": "phd",
            "has_experience": true,
            "basic_salary": "8000",
            "variable_salary": "500",
            "manual_syndicate_incentive": "250",
            "manual_special_raise_2015": "100",
            "manual_fellowship_value": "300",
            "allowances": {
                "transportation": "500",
                "living_cost": "300",
                "cash_allowance": "200"
            },
            "join_date": "2015-08-01"
        },
        "period": may_2024(),
        "loans": [{
            "id": "LN-1",
            "employee_id": "EMP010",
            "total_amount": "12000",
            "remaining_amount": "5000",
            "monthly_installment": "1000",
            "status": "active"
        }],
        "reviews": [{
            "id": "REV-1",
            "employee_id": "EMP010",
            "year": 2023,
            "score": 92,
            "suggested_raise": "5",
            "date": "2023-12-15"
        }],
        "penalties": "50"
    });

    let (status, slip) = post(create_router_for_test(), "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&slip["education_experience_bonus"], "1200");
    assert_money(&slip["performance_raise"], "400");
    assert_money(&slip["allowances_total"], "1000");
    assert_money(&slip["social_package"], "300");
    assert_money(&slip["insurable_wage"], "12960");
    // insurance is computed on the 12,600 cap
    assert_money(&slip["insurance_employee_share"], "1386");
    assert_money(&slip["syndicate_social_share"], "2362.50");
    assert_money(&slip["gross_total"], "15522.50");
    assert_money(&slip["stamp_duty"], "93.14");
    assert_money(&slip["fellowship_fund"], "150");
    assert_money(&slip["syndicate_fellowship_share"], "150");
    assert_money(&slip["tax_deduction"], "1118.67");
    assert_money(&slip["loan_deduction"], "1000");
    assert_money(&slip["net_salary"], "9362.20");
}

#[tokio::test]
async fn test_payslip_coerces_malformed_amounts_to_zero() {
    let body = json!({
        "employee": {
            "id": "EMP020",
            "grade": "1A",
            "basic_salary": "not a number",
            "variable_salary": null,
            "allowances": {"transportation": ""},
            "join_date": "2022-01-01"
        },
        "period": may_2024()
    });

    let (status, slip) = post(create_router_for_test(), "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&slip["basic_salary"], "0");
    assert_money(&slip["insurable_wage"], "1810");
    // insurance is raised to the 2,000 floor
    assert_money(&slip["insurance_employee_share"], "220");
    assert_money(&slip["gross_total"], "2185");
    assert_money(&slip["tax_deduction"], "0");
    assert_money(&slip["net_salary"], "1576.89");
}

#[tokio::test]
async fn test_payslip_folds_in_bonuses_of_the_month_only() {
    let body = json!({
        "employee": grade_1a_employee("EMP001"),
        "period": may_2024(),
        "bonuses": [
            {"id": "B1", "employee_id": "EMP001", "gross_amount": "500", "date": "2024-05-20"},
            {"id": "B2", "employee_id": "EMP001", "gross_amount": "800", "date": "2024-04-20"},
            {"id": "B3", "employee_id": "EMP001", "amount": "900", "date": "2023-05-20"}
        ]
    });

    let (status, slip) = post(create_router_for_test(), "/payroll/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&slip["incentives"], "500");
    assert_money(&slip["insurable_wage"], "6310");
}

#[tokio::test]
async fn test_payroll_run_totals() {
    let body = json!({
        "employees": [grade_1a_employee("EMP001"), grade_1a_employee("EMP002")],
        "period": may_2024(),
        "adjustments": {"EMP002": {"penalties": "100"}}
    });

    let (status, run) = post(create_router_for_test(), "/payroll/run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(run["slips"].as_array().unwrap().len(), 2);
    assert_eq!(run["totals"]["employee_count"], 2);
    assert_money(&run["totals"]["gross_total"], "13798.76");
    assert_money(&run["totals"]["net_salary"], "10133.18");
}

#[tokio::test]
async fn test_payroll_run_collects_seeded_debts() {
    let approved = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let ledger = InMemoryTaxDebtLedger::with_debts(vec![TaxDebt::open(
        "EMP002",
        2023,
        Decimal::from_str("993.96").unwrap(),
        Decimal::from_str("82.83").unwrap(),
        approved,
    )]);
    let config = ConfigLoader::load("./config/egypt").expect("Failed to load config");
    let router = create_router(AppState::with_ledger(config, ledger));
    let body = json!({
        "employees": [grade_1a_employee("EMP001"), grade_1a_employee("EMP002")],
        "period": may_2024(),
        "adjustments": {"EMP002": {"penalties": "100"}}
    });

    let (status, run) = post(router.clone(), "/payroll/run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&run["slips"][0]["tax_settlement_deduction"], "0");
    assert_money(&run["slips"][1]["tax_settlement_deduction"], "82.83");
    assert_money(&run["totals"]["tax_settlement_deduction"], "82.83");
    assert_money(&run["totals"]["net_salary"], "10050.35");

    let (status, debts) = send(router, "GET", "/tax-debts/EMP002", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(debts.as_array().unwrap().len(), 1);
    assert_money(&debts[0]["remaining_amount"], "993.96");
}

// =============================================================================
// Settlements
// =============================================================================

#[tokio::test]
async fn test_settlement_preview_owed() {
    let (status, preview) = post(
        create_router_for_test(),
        "/settlements/preview",
        owed_settlement("EMP001"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let statement = &preview["statement"];
    assert_eq!(statement["months_worked"], 12);
    assert_eq!(statement["status"], "owed");
    assert_money(&statement["total_annual_gross"], "79720");
    assert_money(&statement["taxable_income"], "51490");
    assert_money(&statement["correct_annual_tax"], "1149");
    assert_money(&statement["tax_paid"], "155.04");
    assert_money(&statement["difference"], "993.96");
    assert_money(&statement["proposed_installment"], "82.83");
    assert!(preview["existing_debt"].is_null());
}

#[tokio::test]
async fn test_settlement_lifecycle() {
    let router = create_router_for_test();

    // Approve
    let (status, debt) = post(router.clone(), "/settlements/approve", owed_settlement("EMP001")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(debt["id"].as_str().unwrap().starts_with("TAX-"));
    assert_money(&debt["total_amount"], "993.96");
    assert_money(&debt["monthly_installment"], "82.83");

    // The preview now shows the open debt
    let (_, preview) = post(router.clone(), "/settlements/preview", owed_settlement("EMP001")).await;
    assert_eq!(preview["existing_debt"]["id"], debt["id"]);

    // A second approval is blocked
    let (status, error) = post(router.clone(), "/settlements/approve", owed_settlement("EMP001")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_TAX_DEBT");

    // Payroll collects the installment
    let (_, slip) = post(
        router.clone(),
        "/payroll/calculate",
        json!({"employee": grade_1a_employee("EMP001"), "period": {"year": 2024, "month": 1}}),
    )
    .await;
    assert_money(&slip["tax_settlement_deduction"], "82.83");
    assert_money(&slip["net_salary"], "5033.76");

    // Another employee is unaffected
    let (_, other) = post(
        router.clone(),
        "/payroll/calculate",
        json!({"employee": grade_1a_employee("EMP002"), "period": {"year": 2024, "month": 1}}),
    )
    .await;
    assert_money(&other["tax_settlement_deduction"], "0");

    // The ledger lists the debt
    let (status, debts) = send(router, "GET", "/tax-debts/EMP001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(debts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_collected_debt_allows_new_approval() {
    let router = create_router_for_test();

    let (_, debt) = post(router.clone(), "/settlements/approve", owed_settlement("EMP001")).await;
    let debt_id = debt["id"].as_str().unwrap().to_string();

    let (status, updated) = post(
        router.clone(),
        &format!("/installments/{}", debt_id),
        json!({"amount": "82.83"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_money(&updated["remaining_amount"], "911.13");

    let (_, updated) = post(
        router.clone(),
        &format!("/installments/{}", debt_id),
        json!({"amount": "5000"}),
    )
    .await;
    assert_money(&updated["remaining_amount"], "0");

    let (status, _) = post(router.clone(), "/settlements/approve", owed_settlement("EMP001")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, debts) = send(router, "GET", "/tax-debts/EMP001", None).await;
    assert_eq!(debts.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_overpaid_settlement_cannot_be_approved() {
    let body = json!({"employee": grade_1a_employee("EMP001"), "year": 2023});

    let router = create_router_for_test();
    let (_, preview) = post(router.clone(), "/settlements/preview", body.clone()).await;
    assert_eq!(preview["statement"]["status"], "overpaid");
    assert_money(&preview["statement"]["difference"], "-0.04");
    assert!(preview["statement"]["proposed_installment"].is_null());

    let (status, error) = post(router, "/settlements/approve", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "NEGLIGIBLE_DIFFERENCE");
}

#[tokio::test]
async fn test_settlement_for_year_before_hire() {
    let mut employee = grade_1a_employee("EMP030");
    employee["join_date"] = json!("2024-02-01");
    let body = json!({"employee": employee, "year": 2023});

    let router = create_router_for_test();
    let (status, preview) = post(router.clone(), "/settlements/preview", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(preview["statement"].is_null());

    let (status, error) = post(router, "/settlements/approve", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "NO_ELIGIBLE_MONTHS");
}

#[tokio::test]
async fn test_mid_year_hire_is_prorated() {
    let mut employee = grade_1a_employee("EMP031");
    employee["join_date"] = json!("2023-09-15");

    let (_, preview) = post(
        create_router_for_test(),
        "/settlements/preview",
        json!({"employee": employee, "year": 2023}),
    )
    .await;

    assert_eq!(preview["statement"]["months_worked"], 4);
    assert_eq!(preview["statement"]["start_month"], 9);
    assert_money(&preview["statement"]["personal_exemption"], "6666.67");
}

// =============================================================================
// Bonus issuance
// =============================================================================

#[tokio::test]
async fn test_issue_overtime_bonus() {
    let mut employee = grade_1a_employee("EMP001");
    employee["basic_salary"] = json!("3640");
    let body = json!({
        "employee": employee,
        "type": "overtime",
        "category": "overtime",
        "basis": "overtime",
        "standard_hours": "10",
        "rest_day_hours": "4",
        "tax_rate": "10",
        "date": "2024-06-30"
    });

    let (status, record) = post(create_router_for_test(), "/bonuses/issue", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(record["id"].as_str().unwrap().starts_with("BNS-"));
    assert_money(&record["gross_amount"], "408.67");
    assert_money(&record["stamp_amount"], "2.45");
    assert_money(&record["tax_amount"], "40.87");
    assert_money(&record["net_amount"], "365.35");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_missing_employee_returns_validation_error() {
    let (status, error) = post(
        create_router_for_test(),
        "/payroll/calculate",
        json!({"period": may_2024()}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .body(Body::from(json!({"employee": grade_1a_employee("EMP001")}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_installment_for_unknown_debt() {
    let (status, error) = post(
        create_router_for_test(),
        "/installments/TAX-unknown",
        json!({"amount": "10"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "TAX_DEBT_NOT_FOUND");
}
