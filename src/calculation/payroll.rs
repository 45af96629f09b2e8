//! Monthly payslip composition.
//!
//! This module ties the allowance, incentive, insurance, tax and deduction
//! steps together into a [`PayrollSlip`] for one employee and month, and into a
//! [`PayrollRun`] for a whole workforce.
//!
//! All intermediate math keeps full precision; every monetary field is rounded
//! to two decimals only when it is placed on the slip.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::StatutoryConfig;
use crate::models::{
    BonusRecord, Employee, Loan, OperatorAdjustments, PayrollPeriod, PayrollRun,
    PayrollRunTotals, PayrollSlip, PerformanceReview, TaxDebt,
};

use super::allowances::summarize_allowances;
use super::deductions::{loan_deduction, settlement_deduction};
use super::incentives::{calculate_incentives, monthly_bonus_total};
use super::insurance::calculate_insurance;
use super::rounding::round_money;
use super::tax_brackets::calculate_annual_tax;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The records a payslip is computed against.
///
/// Collections may hold records of any employee; each step filters them by
/// employee id.
#[derive(Debug, Clone, Copy)]
pub struct PayrollContext<'a> {
    /// The month being paid. Only bonuses dated in this month are folded in.
    pub period: PayrollPeriod,
    /// Loans; the employee's first active loan is collected.
    pub loans: &'a [Loan],
    /// Performance reviews; the employee's latest review sets the raise.
    pub reviews: &'a [PerformanceReview],
    /// Bonus records.
    pub bonuses: &'a [BonusRecord],
    /// Settlement debts; the employee's first open debt is collected.
    pub tax_debts: &'a [TaxDebt],
}

impl<'a> PayrollContext<'a> {
    /// A context for the given month with no loans, reviews, bonuses or debts.
    pub fn new(period: PayrollPeriod) -> Self {
        Self {
            period,
            loans: &[],
            reviews: &[],
            bonuses: &[],
            tax_debts: &[],
        }
    }
}

/// Computes one employee's payslip for a month.
///
/// The calculation is pure: identical inputs always produce an identical slip.
/// Missing grades, loans, reviews or debts contribute zero rather than failing.
///
/// # Arguments
///
/// * `employee` - The employee's compensation profile
/// * `context` - The month and the records it is computed against
/// * `adjustments` - Operator-entered incentive, penalty and overtime scalars
/// * `config` - The statutory rules
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{PayrollContext, calculate_payroll};
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Employee, OperatorAdjustments, PayrollPeriod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/egypt").unwrap();
/// let employee: Employee = serde_json::from_str(r#"{
///     "id": "EMP001",
///     "name": "Ahmed Mohamed Ali",
///     "grade": "1A",
///     "basic_salary": "4000",
///     "join_date": "2019-03-01"
/// }"#).unwrap();
///
/// let slip = calculate_payroll(
///     &employee,
///     &PayrollContext::new(PayrollPeriod::new(2024, 5)),
///     &OperatorAdjustments::default(),
///     loader.config(),
/// );
///
/// assert_eq!(slip.insurable_wage, Decimal::from(5810));
/// assert_eq!(slip.gross_total, Decimal::from_str("6899.38").unwrap());
/// ```
pub fn calculate_payroll(
    employee: &Employee,
    context: &PayrollContext<'_>,
    adjustments: &OperatorAdjustments,
    config: &StatutoryConfig,
) -> PayrollSlip {
    let rules = config.payroll();
    let tax_rules = config.tax();

    let allowances = summarize_allowances(&employee.allowances);
    let incentives = calculate_incentives(employee, context.reviews, config);
    let month_bonuses = monthly_bonus_total(&employee.id, context.bonuses, context.period);
    let total_incentives = adjustments.incentives + month_bonuses;

    let insurable_wage = employee.basic_salary
        + employee.variable_salary
        + incentives.total()
        + allowances.non_cash
        + total_incentives
        + adjustments.overtime_pay;

    let insurance = calculate_insurance(insurable_wage, config.insurance());
    let syndicate_social_share = insurance.employer_share;

    let stamp_duty =
        (insurable_wage + allowances.cash + syndicate_social_share) * rules.stamp_duty_rate;

    let fellowship_fund = employee.manual_fellowship_value * rules.fellowship_employee_share;
    let syndicate_fellowship_share = employee.manual_fellowship_value - fellowship_fund;

    // The employer fellowship half never reaches gross.
    let gross_total = insurable_wage + syndicate_social_share + allowances.cash;

    let monthly_taxable =
        insurable_wage + allowances.cash - insurance.employee_share - stamp_duty - fellowship_fund;
    let annual_taxable =
        monthly_taxable * MONTHS_PER_YEAR - tax_rules.annual_exemption(employee.is_special_needs);
    let tax_deduction =
        (calculate_annual_tax(annual_taxable, tax_rules) / MONTHS_PER_YEAR).max(Decimal::ZERO);

    let loan = loan_deduction(&employee.id, context.loans);
    let settlement = settlement_deduction(&employee.id, context.tax_debts);

    let net_salary = gross_total
        - (insurance.total
            + tax_deduction
            + stamp_duty
            + fellowship_fund
            + adjustments.penalties
            + loan
            + settlement);

    let social_package = if employee.allowances.living_cost.is_zero() {
        rules.default_social_package
    } else {
        employee.allowances.living_cost
    };

    PayrollSlip {
        employee_id: employee.id.clone(),
        period: context.period,
        basic_salary: round_money(employee.basic_salary),
        variable_salary: round_money(employee.variable_salary),
        special_raise_2015: round_money(incentives.special_raise_2015),
        labor_grant: round_money(incentives.labor_grant),
        social_package: round_money(social_package),
        syndicate_incentive: round_money(incentives.syndicate_incentive),
        additional_incentive: round_money(incentives.additional_incentive),
        education_experience_bonus: round_money(incentives.education_experience_bonus),
        performance_raise: round_money(incentives.performance_raise),
        allowances_total: round_money(allowances.total),
        cash_allowance: round_money(allowances.cash),
        insurable_wage: round_money(insurable_wage),
        syndicate_social_share: round_money(syndicate_social_share),
        syndicate_fellowship_share: round_money(syndicate_fellowship_share),
        gross_total: round_money(gross_total),
        insurance_employee_share: round_money(insurance.employee_share),
        total_insurance: round_money(insurance.total),
        tax_deduction: round_money(tax_deduction),
        stamp_duty: round_money(stamp_duty),
        fellowship_fund: round_money(fellowship_fund),
        incentives: round_money(total_incentives),
        penalties: round_money(adjustments.penalties),
        overtime_pay: round_money(adjustments.overtime_pay),
        loan_deduction: round_money(loan),
        tax_settlement_deduction: round_money(settlement),
        net_salary: round_money(net_salary),
    }
}

/// Computes the payslips of every employee for a month.
///
/// Adjustments are keyed by employee id; an employee without an entry gets
/// zero incentives, penalties and overtime. Slips keep the input order and the
/// totals are sums of the rounded slip values.
pub fn calculate_payroll_run(
    employees: &[Employee],
    context: &PayrollContext<'_>,
    adjustments: &HashMap<String, OperatorAdjustments>,
    config: &StatutoryConfig,
) -> PayrollRun {
    let no_adjustments = OperatorAdjustments::default();

    let slips: Vec<PayrollSlip> = employees
        .iter()
        .map(|employee| {
            let entered = adjustments.get(&employee.id).unwrap_or(&no_adjustments);
            calculate_payroll(employee, context, entered, config)
        })
        .collect();

    let totals = slips
        .iter()
        .fold(PayrollRunTotals::default(), |mut totals, slip| {
            totals.employee_count += 1;
            totals.gross_total += slip.gross_total;
            totals.total_insurance += slip.total_insurance;
            totals.tax_deduction += slip.tax_deduction;
            totals.stamp_duty += slip.stamp_duty;
            totals.loan_deduction += slip.loan_deduction;
            totals.tax_settlement_deduction += slip.tax_settlement_deduction;
            totals.net_salary += slip.net_salary;
            totals
        });

    PayrollRun {
        period: context.period,
        slips,
        totals,
    }
}
