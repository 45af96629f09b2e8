//! Progressive income tax.
//!
//! Maps annual taxable income to annual tax through the marginal bracket table
//! of [`TaxRules`].

use rust_decimal::Decimal;

use crate::config::TaxRules;

use super::rounding::floor_to_unit;

/// Calculates the annual income tax owed on an annual taxable income.
///
/// The income is first floored to the configured rounding unit (10). Each
/// bracket then contributes `(min(income, upper_limit) - lower_limit) * rate`
/// when the income exceeds the bracket's lower limit, the lower limit being the
/// previous bracket's upper limit. Non-positive income owes nothing.
///
/// The function is pure and total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_tax;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/egypt").unwrap();
/// let tax = calculate_annual_tax(Decimal::from(100000), loader.config().tax());
///
/// // 15,000 @ 10% + 15,000 @ 15% + 30,000 @ 20%
/// assert_eq!(tax, Decimal::from(9750));
/// ```
pub fn calculate_annual_tax(annual_taxable_income: Decimal, rules: &TaxRules) -> Decimal {
    let income = floor_to_unit(annual_taxable_income, rules.income_rounding_unit);
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut annual_tax = Decimal::ZERO;
    let mut lower_limit = Decimal::ZERO;

    for bracket in &rules.brackets {
        if income <= lower_limit {
            break;
        }

        let ceiling = match bracket.upper_limit {
            Some(limit) => income.min(limit),
            None => income,
        };
        annual_tax += (ceiling - lower_limit) * bracket.rate;

        match bracket.upper_limit {
            Some(limit) => lower_limit = limit,
            None => break,
        }
    }

    annual_tax
}
