//! Annual tax settlement statement.
//!
//! The statement annualizes a clean monthly baseline payslip over the months
//! the employee worked in the fiscal year, adds the year's bonus records, and
//! compares the tax legally owed with the tax actually withheld.

use chrono::Datelike;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{
    BonusRecord, Employee, OperatorAdjustments, PayrollPeriod, PerformanceReview,
    SettlementStatement, SettlementStatus,
};

use super::payroll::{PayrollContext, calculate_payroll};
use super::rounding::{ceil_to_cent, floor_to_unit, round_money};
use super::tax_brackets::calculate_annual_tax;

/// Number of months of a fiscal year the employee was employed.
///
/// A hire in the fiscal year counts from the hire month inclusive, so a
/// September hire works 4 months. A hire after the fiscal year works none.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::months_worked;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(2023, 9, 15).unwrap();
/// assert_eq!(months_worked(joined, 2023), 4);
/// assert_eq!(months_worked(joined, 2024), 12);
/// assert_eq!(months_worked(joined, 2022), 0);
/// ```
pub fn months_worked(join_date: NaiveDate, year: i32) -> u32 {
    if join_date.year() > year {
        0
    } else if join_date.year() == year {
        12 - join_date.month0()
    } else {
        12
    }
}

/// Computes the settlement statement of an employee for a fiscal year.
///
/// Returns `None` when the employee has no eligible month in the year.
///
/// The baseline is the payslip computed with no loans, bonuses, debts or
/// operator adjustments; performance reviews still apply. Bonus records of the
/// employee dated in the year are added on top of the annualized baseline.
///
/// # Arguments
///
/// * `employee` - The employee to settle
/// * `year` - The fiscal year
/// * `reviews` - Performance reviews, of any employee
/// * `bonuses` - Bonus records, of any employee and year
/// * `config` - The statutory rules
pub fn calculate_settlement(
    employee: &Employee,
    year: i32,
    reviews: &[PerformanceReview],
    bonuses: &[BonusRecord],
    config: &StatutoryConfig,
) -> Option<SettlementStatement> {
    let months = months_worked(employee.join_date, year);
    if months == 0 {
        return None;
    }
    let start_month = 13 - months;

    let context = PayrollContext {
        reviews,
        ..PayrollContext::new(PayrollPeriod::new(year, start_month))
    };
    let baseline = calculate_payroll(employee, &context, &OperatorAdjustments::default(), config);

    let year_bonuses: Vec<&BonusRecord> = bonuses
        .iter()
        .filter(|bonus| bonus.employee_id == employee.id && bonus.is_in_year(year))
        .collect();
    let bonus_gross: Decimal = year_bonuses.iter().map(|bonus| bonus.effective_gross()).sum();
    let bonus_stamp: Decimal = year_bonuses.iter().map(|bonus| bonus.stamp_amount).sum();
    let bonus_tax: Decimal = year_bonuses.iter().map(|bonus| bonus.tax_amount).sum();

    let months_factor = Decimal::from(months);
    let tax_rules = config.tax();

    let annual_regular_gross =
        (baseline.gross_total - baseline.syndicate_social_share) * months_factor;
    let total_annual_gross = annual_regular_gross + bonus_gross;

    let annual_insurance = baseline.insurance_employee_share * months_factor;
    let annual_stamp = baseline.stamp_duty * months_factor + bonus_stamp;
    let annual_fellowship = baseline.fellowship_fund * months_factor;
    let personal_exemption =
        tax_rules.annual_exemption(employee.is_special_needs) * months_factor / Decimal::from(12);
    let total_deductions = annual_insurance + annual_stamp + annual_fellowship + personal_exemption;

    let taxable_income = floor_to_unit(
        (total_annual_gross - total_deductions).max(Decimal::ZERO),
        tax_rules.income_rounding_unit,
    );
    let correct_annual_tax = calculate_annual_tax(taxable_income, tax_rules);
    let tax_paid = baseline.tax_deduction * months_factor + bonus_tax;
    let difference = correct_annual_tax - tax_paid;

    let rules = config.settlement();
    let status = if difference.abs() <= rules.negligible_difference {
        SettlementStatus::Settled
    } else if difference > Decimal::ZERO {
        SettlementStatus::Owed
    } else {
        SettlementStatus::Overpaid
    };

    let proposed_installment = (status == SettlementStatus::Owed)
        .then(|| ceil_to_cent(difference / Decimal::from(rules.installment_months)));

    Some(SettlementStatement {
        employee_id: employee.id.clone(),
        year,
        months_worked: months,
        start_month,
        annual_regular_gross: round_money(annual_regular_gross),
        annual_bonus_gross: round_money(bonus_gross),
        total_annual_gross: round_money(total_annual_gross),
        annual_insurance: round_money(annual_insurance),
        annual_stamp: round_money(annual_stamp),
        annual_fellowship: round_money(annual_fellowship),
        personal_exemption: round_money(personal_exemption),
        total_deductions: round_money(total_deductions),
        taxable_income,
        correct_annual_tax: round_money(correct_annual_tax),
        tax_paid: round_money(tax_paid),
        difference: round_money(difference),
        status,
        proposed_installment,
    })
}
