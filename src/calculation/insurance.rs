//! Social insurance contribution calculation.
//!
//! The insurable wage is clamped into the statutory bounds before the
//! contribution rates are applied. The clamped value is used for insurance
//! math only; callers keep reporting the unclamped wage.

use rust_decimal::Decimal;

use crate::config::InsuranceRules;

/// Social insurance contributions for one month, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceContributions {
    /// The wage as computed, before clamping.
    pub insurable_wage: Decimal,
    /// The wage after clamping into the statutory bounds.
    pub capped_wage: Decimal,
    /// Employee share, withheld from pay.
    pub employee_share: Decimal,
    /// Employer (syndicate) share.
    pub employer_share: Decimal,
    /// Both shares combined.
    pub total: Decimal,
}

/// Calculates the employee and employer insurance shares for a monthly wage.
///
/// # Arguments
///
/// * `insurable_wage` - The unclamped insurable wage components
/// * `rules` - Wage bounds and contribution rates
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_insurance;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/egypt").unwrap();
/// let result = calculate_insurance(Decimal::from(20000), loader.config().insurance());
///
/// assert_eq!(result.capped_wage, Decimal::from(12600));
/// assert_eq!(result.employee_share, Decimal::from(1386));
/// ```
pub fn calculate_insurance(insurable_wage: Decimal, rules: &InsuranceRules) -> InsuranceContributions {
    let capped_wage = insurable_wage
        .min(rules.max_insurable_wage)
        .max(rules.min_insurable_wage);

    let employee_share = capped_wage * rules.employee_rate;
    let employer_share = capped_wage * rules.employer_rate;

    InsuranceContributions {
        insurable_wage,
        capped_wage,
        employee_share,
        employer_share,
        total: employee_share + employer_share,
    }
}
