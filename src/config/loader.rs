//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll rules from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{GradesFile, RegimeMetadata, StatutoryConfig, StatutoryFile, TaxRules};

/// Loads and provides access to the statutory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/egypt/
/// ├── statutory.yaml   # Regime metadata, insurance, payroll, settlement and bonus rules
/// ├── tax.yaml         # Personal exemption, rounding unit and tax brackets
/// └── grades.yaml      # Job grade table
/// ```
///
/// # Example
///
/// ```
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/egypt").unwrap();
/// assert_eq!(loader.regime().code, "EG-PIT-2024");
/// assert!(loader.config().grade("1A").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The rules are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryFile>(&path.join("statutory.yaml"))?;
        let tax = Self::load_yaml::<TaxRules>(&path.join("tax.yaml"))?;
        let grades = Self::load_yaml::<GradesFile>(&path.join("grades.yaml"))?;

        Self::validate(&statutory, &tax)?;

        Ok(Self {
            config: StatutoryConfig::new(statutory, tax, grades.grades),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rule sets the calculations cannot work with.
    fn validate(statutory: &StatutoryFile, tax: &TaxRules) -> EngineResult<()> {
        let invalid = |message: &str| {
            Err(EngineError::InvalidConfig {
                message: message.to_string(),
            })
        };

        let insurance = &statutory.insurance;
        if insurance.min_insurable_wage > insurance.max_insurable_wage {
            return invalid("min_insurable_wage exceeds max_insurable_wage");
        }
        if statutory.settlement.installment_months == 0 {
            return invalid("installment_months must be at least 1");
        }
        if tax.income_rounding_unit <= Decimal::ZERO {
            return invalid("income_rounding_unit must be positive");
        }
        let bonuses = &statutory.bonuses;
        if bonuses.standard_overtime_divisor <= Decimal::ZERO
            || bonuses.rest_day_overtime_divisor <= Decimal::ZERO
        {
            return invalid("overtime divisors must be positive");
        }

        let Some((top, bounded)) = tax.brackets.split_last() else {
            return invalid("at least one tax bracket is required");
        };
        if top.upper_limit.is_some() {
            return invalid("the last tax bracket must be open-ended");
        }

        let mut previous = Decimal::ZERO;
        for bracket in bounded {
            match bracket.upper_limit {
                Some(limit) if limit > previous => previous = limit,
                Some(_) => return invalid("tax bracket limits must be strictly ascending"),
                None => return invalid("only the last tax bracket may be open-ended"),
            }
        }

        Ok(())
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use crate::models::EducationLevel;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/egypt"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn statutory_file() -> StatutoryFile {
        serde_yaml::from_str(
            &fs::read_to_string(Path::new(config_path()).join("statutory.yaml")).unwrap(),
        )
        .unwrap()
    }

    fn tax_rules() -> TaxRules {
        serde_yaml::from_str(&fs::read_to_string(Path::new(config_path()).join("tax.yaml")).unwrap())
            .unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regime().code, "EG-PIT-2024");
    }

    #[test]
    fn test_insurance_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let insurance = loader.config().insurance();

        assert_eq!(insurance.min_insurable_wage, dec("2000"));
        assert_eq!(insurance.max_insurable_wage, dec("12600"));
        assert_eq!(insurance.employee_rate, dec("0.11"));
        assert_eq!(insurance.employer_rate, dec("0.1875"));
    }

    #[test]
    fn test_payroll_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let payroll = loader.config().payroll();

        assert_eq!(payroll.stamp_duty_rate, dec("0.006"));
        assert_eq!(payroll.labor_grant, dec("10"));
        assert_eq!(
            payroll.education_bonus_levels,
            vec![EducationLevel::Phd, EducationLevel::Diploma]
        );
    }

    #[test]
    fn test_tax_brackets_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tax = loader.config().tax();

        assert_eq!(tax.personal_exemption, dec("20000"));
        assert_eq!(tax.brackets.len(), 6);
        assert_eq!(
            tax.brackets[0],
            TaxBracket {
                upper_limit: Some(dec("40000")),
                rate: Decimal::ZERO
            }
        );
        assert_eq!(tax.brackets[5].upper_limit, None);
        assert_eq!(tax.brackets[5].rate, dec("0.25"));
    }

    #[test]
    fn test_grade_table_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config = loader.config();

        assert_eq!(config.grades().len(), 13);
        assert_eq!(config.grade("1A").unwrap().additional_incentive, dec("1800"));
        assert_eq!(config.grade("56C").unwrap().additional_incentive, dec("1550"));
        assert!(config.grade("9Z").is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("statutory.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_shipped_rules() {
        assert!(ConfigLoader::validate(&statutory_file(), &tax_rules()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bounded_top_bracket() {
        let mut tax = tax_rules();
        tax.brackets.pop();

        let result = ConfigLoader::validate(&statutory_file(), &tax);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_descending_brackets() {
        let mut tax = tax_rules();
        tax.brackets.swap(0, 1);

        let result = ConfigLoader::validate(&statutory_file(), &tax);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_brackets() {
        let mut tax = tax_rules();
        tax.brackets.clear();

        match ConfigLoader::validate(&statutory_file(), &tax) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("at least one"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_inverted_insurance_bounds() {
        let mut statutory = statutory_file();
        statutory.insurance.min_insurable_wage = dec("20000");

        let result = ConfigLoader::validate(&statutory, &tax_rules());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_overtime_divisor() {
        let mut statutory = statutory_file();
        statutory.bonuses.rest_day_overtime_divisor = Decimal::ZERO;

        match ConfigLoader::validate(&statutory, &tax_rules()) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("overtime divisors"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_overtime_divisor() {
        let mut statutory = statutory_file();
        statutory.bonuses.standard_overtime_divisor = dec("-182");

        let result = ConfigLoader::validate(&statutory, &tax_rules());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
