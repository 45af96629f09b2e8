//! Configuration types for the statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::EducationLevel;

/// Metadata about the statutory regime the rules implement.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// Short identifier (e.g., "EG-PIT-2024").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// The legal sources the rules are taken from.
    pub source: String,
}

/// Social insurance wage bounds and contribution rates.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRules {
    /// Lower bound of the insurable wage.
    pub min_insurable_wage: Decimal,
    /// Upper bound of the insurable wage.
    pub max_insurable_wage: Decimal,
    /// Employee contribution rate (e.g., 0.11).
    pub employee_rate: Decimal,
    /// Employer contribution rate (e.g., 0.1875).
    pub employer_rate: Decimal,
}

/// Rules for composing a monthly payslip.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRules {
    /// Stamp duty rate applied to the stamp base.
    pub stamp_duty_rate: Decimal,
    /// Fixed monthly labor grant.
    pub labor_grant: Decimal,
    /// Experience bonus as a fraction of basic salary.
    pub experience_bonus_rate: Decimal,
    /// Education bonus as a fraction of basic salary.
    pub education_bonus_rate: Decimal,
    /// Education levels that earn the education bonus.
    pub education_bonus_levels: Vec<EducationLevel>,
    /// Fraction of the fellowship fund carried by the employee.
    pub fellowship_employee_share: Decimal,
    /// Social package shown when the living-cost allowance is zero.
    pub default_social_package: Decimal,
}

/// Rules for the annual settlement installment plan.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementRules {
    /// Number of monthly installments a debt is spread over.
    pub installment_months: u32,
    /// Differences at or below this magnitude are treated as settled.
    pub negligible_difference: Decimal,
}

/// Rules for issuing bonus and overtime records.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRules {
    /// Stamp duty rate withheld on bonuses.
    pub stamp_rate: Decimal,
    /// Monthly hours dividing basic salary into a standard hourly rate.
    pub standard_overtime_divisor: Decimal,
    /// Multiplier for standard overtime hours.
    pub standard_overtime_multiplier: Decimal,
    /// Monthly hours dividing basic salary into a rest-day hourly rate.
    pub rest_day_overtime_divisor: Decimal,
    /// Multiplier for rest-day overtime hours.
    pub rest_day_overtime_multiplier: Decimal,
}

/// Statutory rules file structure (statutory.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryFile {
    /// Regime metadata.
    pub regime: RegimeMetadata,
    /// Insurance rules.
    pub insurance: InsuranceRules,
    /// Payslip rules.
    pub payroll: PayrollRules,
    /// Settlement rules.
    pub settlement: SettlementRules,
    /// Bonus issuance rules.
    pub bonuses: BonusRules,
}

/// One marginal band of the income tax table.
///
/// The lower bound is the previous band's upper limit (zero for the first band).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Upper limit of the band; `None` for the open-ended top band.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// Marginal rate within the band.
    pub rate: Decimal,
}

/// Income tax rules (tax.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRules {
    /// Annual personal exemption.
    pub personal_exemption: Decimal,
    /// Exemption multiplier for employees with special needs.
    pub special_needs_multiplier: Decimal,
    /// Taxable income is floored to a multiple of this unit.
    pub income_rounding_unit: Decimal,
    /// Marginal bands, ascending, the last one open-ended.
    pub brackets: Vec<TaxBracket>,
}

impl TaxRules {
    /// The personal exemption that applies to an employee for a full year.
    pub fn annual_exemption(&self, is_special_needs: bool) -> Decimal {
        if is_special_needs {
            self.personal_exemption * self.special_needs_multiplier
        } else {
            self.personal_exemption
        }
    }
}

/// A job grade and its fixed additional incentive.
#[derive(Debug, Clone, Deserialize)]
pub struct JobGrade {
    /// The human-readable name of the grade.
    pub name: String,
    /// The reference salary of the grade.
    pub salary: Decimal,
    /// The additional incentive paid monthly to holders of the grade.
    pub additional_incentive: Decimal,
    /// Typical positions at this grade.
    pub description: String,
}

/// Grades configuration file structure (grades.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct GradesFile {
    /// Map of grade code to grade details.
    pub grades: HashMap<String, JobGrade>,
}

/// The complete statutory configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    regime: RegimeMetadata,
    insurance: InsuranceRules,
    payroll: PayrollRules,
    settlement: SettlementRules,
    bonuses: BonusRules,
    tax: TaxRules,
    grades: HashMap<String, JobGrade>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(statutory: StatutoryFile, tax: TaxRules, grades: HashMap<String, JobGrade>) -> Self {
        Self {
            regime: statutory.regime,
            insurance: statutory.insurance,
            payroll: statutory.payroll,
            settlement: statutory.settlement,
            bonuses: statutory.bonuses,
            tax,
            grades,
        }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.regime
    }

    /// Returns the insurance rules.
    pub fn insurance(&self) -> &InsuranceRules {
        &self.insurance
    }

    /// Returns the payslip rules.
    pub fn payroll(&self) -> &PayrollRules {
        &self.payroll
    }

    /// Returns the settlement rules.
    pub fn settlement(&self) -> &SettlementRules {
        &self.settlement
    }

    /// Returns the bonus issuance rules.
    pub fn bonuses(&self) -> &BonusRules {
        &self.bonuses
    }

    /// Returns the income tax rules.
    pub fn tax(&self) -> &TaxRules {
        &self.tax
    }

    /// Returns all job grades.
    pub fn grades(&self) -> &HashMap<String, JobGrade> {
        &self.grades
    }

    /// Looks up a job grade by code.
    pub fn grade(&self, code: &str) -> Option<&JobGrade> {
        self.grades.get(code)
    }
}
