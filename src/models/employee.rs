//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] struct, the [`MaritalStatus`]
//! enum, and the fixed feature layout submitted to the classifier.

use serde::{Deserialize, Serialize};

/// Number of features in the classifier contract.
pub const FEATURE_COUNT: usize = 11;

/// Feature column names, in the exact order the classifier expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "OverTime",
    "TotalWorkingYears",
    "JobLevel",
    "YearsAtCompany",
    "MonthlyIncome",
    "Age",
    "MaritalStatus",
    "YearsWithCurrManager",
    "YearsInCurrentRole",
    "JobSatisfaction",
    "WorkLifeBalance",
];

/// The numeric feature row handed to a classifier, ordered as [`FEATURE_NAMES`].
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Marital status of an employee, encoded as its ordinal on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaritalStatus {
    /// Encoded as 0.
    #[default]
    Single,
    /// Encoded as 1.
    Married,
    /// Encoded as 2.
    Divorced,
}

impl MaritalStatus {
    /// Returns the display label ("Single", "Married" or "Divorced").
    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
        }
    }
}

impl TryFrom<u8> for MaritalStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MaritalStatus::Single),
            1 => Ok(MaritalStatus::Married),
            2 => Ok(MaritalStatus::Divorced),
            other => Err(format!("invalid marital status code {}", other)),
        }
    }
}

impl From<MaritalStatus> for u8 {
    fn from(status: MaritalStatus) -> Self {
        match status {
            MaritalStatus::Single => 0,
            MaritalStatus::Married => 1,
            MaritalStatus::Divorced => 2,
        }
    }
}

/// The eleven attributes of one employee, as collected for a single cycle.
///
/// A record is assumed to hold values inside each field's individual domain
/// (the collector guarantees that); only cross-field relationships are
/// checked afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRecord {
    /// Whether the employee frequently works overtime (0/1 on the wire).
    #[serde(with = "flag")]
    pub over_time: bool,
    /// Total years of working experience.
    pub total_working_years: u32,
    /// Job level, 1 through 5.
    pub job_level: u8,
    /// Years at the current company.
    pub years_at_company: u32,
    /// Monthly income.
    pub monthly_income: u32,
    /// Age in years.
    pub age: u32,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Years with the current manager.
    pub years_with_curr_manager: u32,
    /// Years in the current role.
    pub years_in_current_role: u32,
    /// Job satisfaction, 1 (low) through 4 (high).
    pub job_satisfaction: u8,
    /// Work-life balance, 1 (poor) through 4 (excellent).
    pub work_life_balance: u8,
}

impl Default for EmployeeRecord {
    /// The initial values of the input form.
    fn default() -> Self {
        Self {
            over_time: false,
            total_working_years: 5,
            job_level: 1,
            years_at_company: 3,
            monthly_income: 5000,
            age: 30,
            marital_status: MaritalStatus::Single,
            years_with_curr_manager: 2,
            years_in_current_role: 2,
            job_satisfaction: 1,
            work_life_balance: 1,
        }
    }
}

impl EmployeeRecord {
    /// Returns the integer value of every field, ordered as [`FEATURE_NAMES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use attrition_engine::models::EmployeeRecord;
    ///
    /// let values = EmployeeRecord::default().values();
    /// assert_eq!(values[0], 0); // OverTime
    /// assert_eq!(values[4], 5000); // MonthlyIncome
    /// ```
    pub fn values(&self) -> [u32; FEATURE_COUNT] {
        [
            u32::from(self.over_time),
            self.total_working_years,
            u32::from(self.job_level),
            self.years_at_company,
            self.monthly_income,
            self.age,
            u32::from(u8::from(self.marital_status)),
            self.years_with_curr_manager,
            self.years_in_current_role,
            u32::from(self.job_satisfaction),
            u32::from(self.work_life_balance),
        ]
    }

    /// Returns the feature row submitted to the classifier.
    pub fn features(&self) -> FeatureVector {
        self.values().map(f64::from)
    }

    /// Returns `(feature name, value)` pairs in contract order.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, u32)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }
}

/// Serializes a boolean as the integers 0 and 1.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!(
                "expected 0 or 1 for a flag, got {}",
                other
            ))),
        }
    }
}
