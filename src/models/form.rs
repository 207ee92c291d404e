//! Input form field descriptors.
//!
//! Each field of an [`EmployeeRecord`] has a label, an inclusive range, a
//! step, a default, and optionally display labels for its choices. The same
//! table drives per-field domain checks at the collection boundary and the
//! `/form` endpoint used to draw the input widgets.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::employee::{EmployeeRecord, FEATURE_COUNT};

/// Describes one input field and its domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// The feature column name (e.g., "YearsAtCompany").
    pub name: &'static str,
    /// Human-readable label (e.g., "Years at Company").
    pub label: &'static str,
    /// Smallest allowed value (inclusive).
    pub min: u32,
    /// Largest allowed value (inclusive).
    pub max: u32,
    /// Allowed increment starting from `min`.
    pub step: u32,
    /// Initial value shown by the form.
    pub default: u32,
    /// Display labels for coded choices, indexed from `min`.
    #[serde(skip_serializing_if = "has_no_choices")]
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    const fn range(name: &'static str, label: &'static str, min: u32, max: u32) -> Self {
        Self {
            name,
            label,
            min,
            max,
            step: 1,
            default: min,
            choices: &[],
        }
    }

    const fn with_default(mut self, default: u32) -> Self {
        self.default = default;
        self
    }

    const fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    const fn with_choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    /// Checks a single value against this field's range and step.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrition_engine::models::form_fields;
    ///
    /// let income = &form_fields()[4];
    /// assert!(income.check(4500).is_ok());
    /// assert!(income.check(4750).is_err());
    /// ```
    pub fn check(&self, value: u32) -> EngineResult<()> {
        if value < self.min || value > self.max {
            return Err(EngineError::InvalidField {
                field: self.name.to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    self.min, self.max, value
                ),
            });
        }
        if (value - self.min) % self.step != 0 {
            return Err(EngineError::InvalidField {
                field: self.name.to_string(),
                message: format!("must be a multiple of {} from {}, got {}", self.step, self.min, value),
            });
        }
        Ok(())
    }

    /// Returns the display text for a value, using the choice label if one exists.
    pub fn display(&self, value: u32) -> String {
        value
            .checked_sub(self.min)
            .and_then(|index| self.choices.get(index as usize))
            .map(|label| label.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

fn has_no_choices(choices: &&'static [&'static str]) -> bool {
    choices.is_empty()
}

static FORM_FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec::range("OverTime", "OverTime", 0, 1).with_choices(&["No", "Yes"]),
    FieldSpec::range("TotalWorkingYears", "Total Working Years", 0, 50).with_default(5),
    FieldSpec::range("JobLevel", "Job Level", 1, 5),
    FieldSpec::range("YearsAtCompany", "Years at Company", 0, 40).with_default(3),
    FieldSpec::range("MonthlyIncome", "Monthly Income", 1000, 50000)
        .with_step(500)
        .with_default(5000),
    FieldSpec::range("Age", "Age", 18, 65).with_default(30),
    FieldSpec::range("MaritalStatus", "Marital Status", 0, 2)
        .with_choices(&["Single", "Married", "Divorced"]),
    FieldSpec::range("YearsWithCurrManager", "Years with Current Manager", 0, 20).with_default(2),
    FieldSpec::range("YearsInCurrentRole", "Years in Current Role", 0, 20).with_default(2),
    FieldSpec::range("JobSatisfaction", "Job Satisfaction", 1, 4),
    FieldSpec::range("WorkLifeBalance", "Work-Life Balance", 1, 4),
];

/// Returns the field descriptors, ordered as [`FEATURE_NAMES`](super::FEATURE_NAMES).
pub fn form_fields() -> &'static [FieldSpec; FEATURE_COUNT] {
    &FORM_FIELDS
}

/// Checks raw field values (ordered as [`FEATURE_NAMES`](super::FEATURE_NAMES)) against their domains.
///
/// Returns the first field that is out of range.
pub fn check_domains(values: &[u32; FEATURE_COUNT]) -> EngineResult<()> {
    FORM_FIELDS
        .iter()
        .zip(values)
        .try_for_each(|(field, &value)| field.check(value))
}

/// A labelled `(field label, display value)` row for echoing an input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnteredValue {
    /// The feature column name.
    pub name: &'static str,
    /// The human-readable label.
    pub label: &'static str,
    /// The value as shown to the operator (choice labels resolved).
    pub display: String,
}

/// Lists the record's values with labels, for the "data entered" panel.
pub fn entered_values(record: &EmployeeRecord) -> Vec<EnteredValue> {
    FORM_FIELDS
        .iter()
        .zip(record.values())
        .map(|(field, value)| EnteredValue {
            name: field.name,
            label: field.label,
            display: field.display(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_NAMES;

    #[test]
    fn test_field_names_follow_feature_contract() {
        let names: Vec<&str> = form_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn test_defaults_match_default_record() {
        let defaults: Vec<u32> = form_fields().iter().map(|f| f.default).collect();
        assert_eq!(defaults, EmployeeRecord::default().values().to_vec());
    }

    #[test]
    fn test_default_record_is_within_domains() {
        assert!(check_domains(&EmployeeRecord::default().values()).is_ok());
    }

    #[test]
    fn test_out_of_range_value_names_the_field() {
        let mut values = EmployeeRecord::default().values();
        values[5] = 17; // Age

        match check_domains(&values) {
            Err(EngineError::InvalidField { field, message }) => {
                assert_eq!(field, "Age");
                assert!(message.contains("between 18 and 65"));
            }
            other => panic!("Expected InvalidField error, got {:?}", other),
        }
    }

    #[test]
    fn test_monthly_income_must_follow_step() {
        let income = &form_fields()[4];
        assert!(income.check(1000).is_ok());
        assert!(income.check(50000).is_ok());
        assert!(income.check(1250).is_err());
        assert!(income.check(50500).is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let mut values = EmployeeRecord::default().values();
        values[2] = 0; // JobLevel
        values[9] = 9; // JobSatisfaction

        match check_domains(&values) {
            Err(EngineError::InvalidField { field, .. }) => assert_eq!(field, "JobLevel"),
            other => panic!("Expected InvalidField error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_resolves_choice_labels() {
        assert_eq!(form_fields()[0].display(1), "Yes");
        assert_eq!(form_fields()[0].display(0), "No");
        assert_eq!(form_fields()[6].display(2), "Divorced");
        assert_eq!(form_fields()[5].display(42), "42");
    }

    #[test]
    fn test_entered_values_lists_every_field() {
        let rows = entered_values(&EmployeeRecord::default());
        assert_eq!(rows.len(), FEATURE_COUNT);
        assert_eq!(rows[1].label, "Total Working Years");
        assert_eq!(rows[1].display, "5");
        assert_eq!(rows[6].display, "Single");
    }
}
