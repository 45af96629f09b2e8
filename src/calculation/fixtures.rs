//! Record builders shared by the calculation tests.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{
    Allowances, BonusCategory, BonusRecord, EducationLevel, Employee, Loan, LoanStatus,
    PerformanceReview, TaxDebt,
};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Basic 4,000 at grade 1A, no allowances or overrides, joined 2019-03-01.
pub fn employee() -> Employee {
    Employee {
        id: "EMP001".to_string(),
        name: "Ahmed Mohamed Ali".to_string(),
        grade: Some("1A".to_string()),
        education_level: EducationLevel::None,
        has_experience: false,
        is_special_needs: false,
        basic_salary: dec("4000"),
        variable_salary: Decimal::ZERO,
        manual_syndicate_incentive: Decimal::ZERO,
        manual_special_raise_2015: Decimal::ZERO,
        manual_fellowship_value: Decimal::ZERO,
        allowances: Allowances::default(),
        join_date: date(2019, 3, 1),
    }
}

pub fn review(employee_id: &str, suggested_raise: &str, on: NaiveDate) -> PerformanceReview {
    PerformanceReview {
        id: format!("REV-{}-{}", employee_id, on),
        employee_id: employee_id.to_string(),
        year: 2024,
        score: dec("85"),
        rating: Some("Very Good".to_string()),
        notes: String::new(),
        suggested_raise: dec(suggested_raise),
        date: on,
    }
}

pub fn bonus(employee_id: &str, gross: &str, tax: &str, stamp: &str, on: NaiveDate) -> BonusRecord {
    BonusRecord {
        id: format!("BNS-{}-{}", employee_id, on),
        employee_id: employee_id.to_string(),
        kind: "exceptional effort".to_string(),
        category: BonusCategory::Bonus,
        amount: dec(gross),
        gross_amount: dec(gross),
        tax_rate: Decimal::ZERO,
        tax_amount: dec(tax),
        stamp_amount: dec(stamp),
        net_amount: dec(gross) - dec(tax) - dec(stamp),
        date: on,
        details: None,
    }
}

pub fn loan(employee_id: &str, remaining: &str, installment: &str, status: LoanStatus) -> Loan {
    Loan {
        id: format!("LN-{}", employee_id),
        employee_id: employee_id.to_string(),
        total_amount: dec("10000"),
        remaining_amount: dec(remaining),
        monthly_installment: dec(installment),
        start_date: Some(date(2023, 6, 1)),
        status,
    }
}

pub fn debt(employee_id: &str, year: i32, remaining: &str, installment: &str) -> TaxDebt {
    TaxDebt {
        id: format!("TAX-{}-{}", employee_id, year),
        employee_id: employee_id.to_string(),
        year,
        total_amount: dec("1000"),
        remaining_amount: dec(remaining),
        monthly_installment: dec(installment),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
    }
}
