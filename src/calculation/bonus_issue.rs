//! Bonus and overtime record issuance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BonusRules;
use crate::models::{BonusCategory, BonusRecord, Employee, lenient};

use super::rounding::round_money;

/// How the gross amount of a new record is determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum BonusBasis {
    /// A fixed amount entered by the operator.
    Fixed {
        /// The gross amount.
        #[serde(default, deserialize_with = "lenient::decimal")]
        amount: Decimal,
    },
    /// Overtime hours priced from the employee's basic salary.
    Overtime {
        /// Hours worked on regular days.
        #[serde(default, deserialize_with = "lenient::decimal")]
        standard_hours: Decimal,
        /// Hours worked on rest days.
        #[serde(default, deserialize_with = "lenient::decimal")]
        rest_day_hours: Decimal,
    },
}

/// The gross amount of an overtime payment.
///
/// Standard hours are paid at `basic / 182 * 1.35`, rest-day hours at
/// `basic / 210 * 2`; divisors and multipliers come from the rules.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::overtime_gross;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/egypt").unwrap();
/// let gross = overtime_gross(
///     Decimal::from(3640),
///     Decimal::from(10),
///     Decimal::from(4),
///     loader.config().bonuses(),
/// );
///
/// assert_eq!(gross, Decimal::from_str("408.67").unwrap());
/// ```
pub fn overtime_gross(
    basic_salary: Decimal,
    standard_hours: Decimal,
    rest_day_hours: Decimal,
    rules: &BonusRules,
) -> Decimal {
    let standard_rate =
        basic_salary / rules.standard_overtime_divisor * rules.standard_overtime_multiplier;
    let rest_day_rate =
        basic_salary / rules.rest_day_overtime_divisor * rules.rest_day_overtime_multiplier;

    round_money(standard_hours * standard_rate + rest_day_hours * rest_day_rate)
}

/// Builds a new bonus record for an employee with its withholding.
///
/// Stamp duty is withheld at the configured rate and tax at `tax_rate`
/// percent, both on the rounded gross. The rate is clamped to 0 through 100.
/// The legacy `amount` mirrors the gross.
///
/// # Arguments
///
/// * `employee` - The paid employee
/// * `kind` - Free-form label of the payment
/// * `category` - Bonus, grant or overtime
/// * `basis` - How the gross is determined
/// * `tax_rate` - Tax rate, as a percentage
/// * `date` - The date the payment is due
/// * `rules` - Bonus issuance rules
pub fn issue_bonus(
    employee: &Employee,
    kind: &str,
    category: BonusCategory,
    basis: &BonusBasis,
    tax_rate: Decimal,
    date: NaiveDate,
    rules: &BonusRules,
) -> BonusRecord {
    let (gross_amount, details) = match basis {
        BonusBasis::Fixed { amount } => (round_money(*amount), None),
        BonusBasis::Overtime {
            standard_hours,
            rest_day_hours,
        } => (
            overtime_gross(employee.basic_salary, *standard_hours, *rest_day_hours, rules),
            Some(format!(
                "Standard hours: {}, rest-day hours: {}",
                standard_hours, rest_day_hours
            )),
        ),
    };

    let tax_rate = tax_rate.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let stamp_amount = round_money(gross_amount * rules.stamp_rate);
    let tax_amount = round_money(gross_amount * (tax_rate / Decimal::ONE_HUNDRED));
    let net_amount = round_money(gross_amount - stamp_amount - tax_amount);

    BonusRecord {
        id: format!("BNS-{}", Uuid::new_v4()),
        employee_id: employee.id.clone(),
        kind: kind.to_string(),
        category,
        amount: gross_amount,
        gross_amount,
        tax_rate,
        tax_amount,
        stamp_amount,
        net_amount,
        date,
        details,
    }
}
