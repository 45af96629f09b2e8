//! Employee model and related types.
//!
//! This module defines the [`Employee`] compensation profile, the
//! [`EducationLevel`] enum and the [`Allowances`] bundle.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// The highest education level held by an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// No qualifying degree.
    #[default]
    None,
    /// Post-graduate diploma.
    Diploma,
    /// Master's degree.
    Master,
    /// Doctorate.
    Phd,
}

/// The monthly allowances paid to an employee.
///
/// Every allowance except [`cash_allowance`](Allowances::cash_allowance) is part
/// of the insurable wage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowances {
    /// Transportation / travel allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub transportation: Decimal,
    /// Housing allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub housing: Decimal,
    /// Clothing allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub clothing: Decimal,
    /// Meal allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub meal: Decimal,
    /// Screen work allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub screen: Decimal,
    /// Full-time dedication allowance (engineers, accountants, lawyers).
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub dedication: Decimal,
    /// Occupational risk allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub risk: Decimal,
    /// Cashier allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cashier: Decimal,
    /// Secretariat allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub secretariat: Decimal,
    /// Infection exposure allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub infection: Decimal,
    /// Other work-nature allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub work_nature: Decimal,
    /// Representation allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub representation: Decimal,
    /// Driving allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub driving: Decimal,
    /// Cost-of-living raise.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub living_cost: Decimal,
    /// Fixed overtime allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_allowance: Decimal,
    /// Cash allowance, excluded from the insurable wage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cash_allowance: Decimal,
    /// Complementary incentive allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub complementary_incentive: Decimal,
    /// Residence allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub residence_allowance: Decimal,
    /// Minimum social package allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub min_social_package: Decimal,
    /// Labor grant allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub labor_grant_allowance: Decimal,
    /// Additional social raise allowance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub additional_social_allowance: Decimal,
}

impl Allowances {
    /// Returns every allowance with its field name, cash allowance included.
    pub fn entries(&self) -> [(&'static str, Decimal); 21] {
        [
            ("transportation", self.transportation),
            ("housing", self.housing),
            ("clothing", self.clothing),
            ("meal", self.meal),
            ("screen", self.screen),
            ("dedication", self.dedication),
            ("risk", self.risk),
            ("cashier", self.cashier),
            ("secretariat", self.secretariat),
            ("infection", self.infection),
            ("work_nature", self.work_nature),
            ("representation", self.representation),
            ("driving", self.driving),
            ("living_cost", self.living_cost),
            ("overtime_allowance", self.overtime_allowance),
            ("cash_allowance", self.cash_allowance),
            ("complementary_incentive", self.complementary_incentive),
            ("residence_allowance", self.residence_allowance),
            ("min_social_package", self.min_social_package),
            ("labor_grant_allowance", self.labor_grant_allowance),
            ("additional_social_allowance", self.additional_social_allowance),
        ]
    }
}

/// An employee's compensation profile.
///
/// Records are owned by external CRUD collaborators; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job grade code (e.g., "1A"), a key into the grade table.
    #[serde(default)]
    pub grade: Option<String>,
    /// Highest education level.
    #[serde(default)]
    pub education_level: EducationLevel,
    /// Whether the employee brought prior experience (10% experience bonus).
    #[serde(default)]
    pub has_experience: bool,
    /// Whether the employee has special needs (raised personal exemption).
    #[serde(default)]
    pub is_special_needs: bool,
    /// Basic insurable salary.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub basic_salary: Decimal,
    /// Variable salary.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub variable_salary: Decimal,
    /// Manually entered syndicate incentive.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub manual_syndicate_incentive: Decimal,
    /// Manually entered 2015 special raise.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub manual_special_raise_2015: Decimal,
    /// Manually entered fellowship fund total, split between employee and employer.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub manual_fellowship_value: Decimal,
    /// Monthly allowances.
    #[serde(default)]
    pub allowances: Allowances,
    /// The date the employee joined.
    pub join_date: NaiveDate,
}
