//! Incentive, raise and bonus components of the insurable wage.

use rust_decimal::Decimal;

use crate::config::{PayrollRules, StatutoryConfig};
use crate::models::{BonusRecord, Employee, PayrollPeriod, PerformanceReview};

/// The incentive components derived from an employee's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncentiveBreakdown {
    /// Manually entered syndicate incentive.
    pub syndicate_incentive: Decimal,
    /// Additional incentive of the employee's job grade.
    pub additional_incentive: Decimal,
    /// Education and experience bonus.
    pub education_experience_bonus: Decimal,
    /// Manually entered 2015 special raise.
    pub special_raise_2015: Decimal,
    /// Fixed labor grant.
    pub labor_grant: Decimal,
    /// Raise suggested by the latest performance review.
    pub performance_raise: Decimal,
}

impl IncentiveBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> Decimal {
        self.syndicate_incentive
            + self.additional_incentive
            + self.education_experience_bonus
            + self.special_raise_2015
            + self.labor_grant
            + self.performance_raise
    }
}

/// Derives the incentive components for an employee.
///
/// - The syndicate incentive and the 2015 special raise are the manual override
///   fields of the employee, not formulas.
/// - The additional incentive is looked up by grade; an unknown or missing
///   grade yields zero.
/// - The performance raise is `basic * suggested_raise / 100` of the employee's
///   latest review, zero without reviews.
pub fn calculate_incentives(
    employee: &Employee,
    reviews: &[PerformanceReview],
    config: &StatutoryConfig,
) -> IncentiveBreakdown {
    let additional_incentive = employee
        .grade
        .as_deref()
        .and_then(|code| config.grade(code))
        .map(|grade| grade.additional_incentive)
        .unwrap_or(Decimal::ZERO);

    let raise_percentage = latest_review(&employee.id, reviews)
        .map(|review| review.suggested_raise)
        .unwrap_or(Decimal::ZERO);

    IncentiveBreakdown {
        syndicate_incentive: employee.manual_syndicate_incentive,
        additional_incentive,
        education_experience_bonus: education_experience_bonus(employee, config.payroll()),
        special_raise_2015: employee.manual_special_raise_2015,
        labor_grant: config.payroll().labor_grant,
        performance_raise: employee.basic_salary * raise_percentage / Decimal::ONE_HUNDRED,
    }
}

/// Finds the most recently dated review of an employee.
///
/// When two reviews share the latest date, the one listed first wins.
pub fn latest_review<'a>(
    employee_id: &str,
    reviews: &'a [PerformanceReview],
) -> Option<&'a PerformanceReview> {
    reviews
        .iter()
        .filter(|review| review.employee_id == employee_id)
        .fold(None, |latest: Option<&PerformanceReview>, review| match latest {
            Some(current) if current.date >= review.date => Some(current),
            _ => Some(review),
        })
}

/// Experience bonus plus education bonus, both as fractions of basic salary.
///
/// Only the education levels listed in the rules qualify. The shipped rules
/// list `phd` and `diploma`; `master` earns nothing.
pub fn education_experience_bonus(employee: &Employee, rules: &PayrollRules) -> Decimal {
    let experience = if employee.has_experience {
        employee.basic_salary * rules.experience_bonus_rate
    } else {
        Decimal::ZERO
    };

    let education = if rules
        .education_bonus_levels
        .contains(&employee.education_level)
    {
        employee.basic_salary * rules.education_bonus_rate
    } else {
        Decimal::ZERO
    };

    experience + education
}

/// Sums the gross of an employee's bonuses dated in the payroll month.
pub fn monthly_bonus_total(
    employee_id: &str,
    bonuses: &[BonusRecord],
    period: PayrollPeriod,
) -> Decimal {
    bonuses
        .iter()
        .filter(|bonus| bonus.employee_id == employee_id && period.contains(bonus.date))
        .map(BonusRecord::effective_gross)
        .sum()
}
