//! Request types for the Attrition Decision Engine API.
//!
//! This module defines the JSON request structure for the `/predict`
//! endpoint. Field names match the classifier's feature columns.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, FEATURE_COUNT, MaritalStatus, check_domains};

/// Request body for the `/predict` endpoint.
///
/// Values are taken as plain integers and checked against each field's
/// domain when converted into an [`EmployeeRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionRequest {
    /// 1 if the employee frequently works overtime, otherwise 0.
    pub over_time: u32,
    /// Total years of working experience.
    pub total_working_years: u32,
    /// Job level, 1 through 5.
    pub job_level: u32,
    /// Years at the current company.
    pub years_at_company: u32,
    /// Monthly income, in steps of 500.
    pub monthly_income: u32,
    /// Age in years.
    pub age: u32,
    /// 0 = Single, 1 = Married, 2 = Divorced.
    pub marital_status: u32,
    /// Years with the current manager.
    pub years_with_curr_manager: u32,
    /// Years in the current role.
    pub years_in_current_role: u32,
    /// Job satisfaction, 1 through 4.
    pub job_satisfaction: u32,
    /// Work-life balance, 1 through 4.
    pub work_life_balance: u32,
}

impl PredictionRequest {
    fn values(&self) -> [u32; FEATURE_COUNT] {
        [
            self.over_time,
            self.total_working_years,
            self.job_level,
            self.years_at_company,
            self.monthly_income,
            self.age,
            self.marital_status,
            self.years_with_curr_manager,
            self.years_in_current_role,
            self.job_satisfaction,
            self.work_life_balance,
        ]
    }
}

fn small(field: &str, value: u32) -> EngineResult<u8> {
    u8::try_from(value).map_err(|_| EngineError::InvalidField {
        field: field.to_string(),
        message: format!("value {} is out of range", value),
    })
}

impl TryFrom<PredictionRequest> for EmployeeRecord {
    type Error = EngineError;

    fn try_from(req: PredictionRequest) -> Result<Self, Self::Error> {
        check_domains(&req.values())?;

        let marital_code = small("MaritalStatus", req.marital_status)?;
        let marital_status =
            MaritalStatus::try_from(marital_code).map_err(|message| EngineError::InvalidField {
                field: "MaritalStatus".to_string(),
                message,
            })?;

        Ok(EmployeeRecord {
            over_time: req.over_time == 1,
            total_working_years: req.total_working_years,
            job_level: small("JobLevel", req.job_level)?,
            years_at_company: req.years_at_company,
            monthly_income: req.monthly_income,
            age: req.age,
            marital_status,
            years_with_curr_manager: req.years_with_curr_manager,
            years_in_current_role: req.years_in_current_role,
            job_satisfaction: small("JobSatisfaction", req.job_satisfaction)?,
            work_life_balance: small("WorkLifeBalance", req.work_life_balance)?,
        })
    }
}

impl From<EmployeeRecord> for PredictionRequest {
    fn from(record: EmployeeRecord) -> Self {
        let [
            over_time,
            total_working_years,
            job_level,
            years_at_company,
            monthly_income,
            age,
            marital_status,
            years_with_curr_manager,
            years_in_current_role,
            job_satisfaction,
            work_life_balance,
        ] = record.values();

        PredictionRequest {
            over_time,
            total_working_years,
            job_level,
            years_at_company,
            monthly_income,
            age,
            marital_status,
            years_with_curr_manager,
            years_in_current_role,
            job_satisfaction,
            work_life_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_b_json() -> &'static str {
        r#"{
            "OverTime": 0,
            "TotalWorkingYears": 10,
            "JobLevel": 2,
            "YearsAtCompany": 5,
            "MonthlyIncome": 4000,
            "Age": 29,
            "MaritalStatus": 0,
            "YearsWithCurrManager": 2,
            "YearsInCurrentRole": 3,
            "JobSatisfaction": 4,
            "WorkLifeBalance": 4
        }"#
    }

    #[test]
    fn test_deserialize_prediction_request() {
        let request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        assert_eq!(request.total_working_years, 10);
        assert_eq!(request.monthly_income, 4000);
        assert_eq!(request.work_life_balance, 4);
    }

    #[test]
    fn test_request_conversion() {
        let request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        let record = EmployeeRecord::try_from(request).unwrap();

        assert!(!record.over_time);
        assert_eq!(record.job_level, 2);
        assert_eq!(record.marital_status, MaritalStatus::Single);
        assert_eq!(record.years_in_current_role, 3);
    }

    #[test]
    fn test_out_of_domain_field_is_rejected() {
        let mut request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        request.work_life_balance = 5;

        match EmployeeRecord::try_from(request) {
            Err(EngineError::InvalidField { field, .. }) => assert_eq!(field, "WorkLifeBalance"),
            other => panic!("Expected InvalidField error, got {:?}", other),
        }
    }

    #[test]
    fn test_overtime_must_be_flag() {
        let mut request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        request.over_time = 3;

        assert!(EmployeeRecord::try_from(request).is_err());
    }

    #[test]
    fn test_income_off_step_is_rejected() {
        let mut request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        request.monthly_income = 4100;

        match EmployeeRecord::try_from(request) {
            Err(EngineError::InvalidField { field, message }) => {
                assert_eq!(field, "MonthlyIncome");
                assert!(message.contains("multiple of 500"));
            }
            other => panic!("Expected InvalidField error, got {:?}", other),
        }
    }

    #[test]
    fn test_cross_field_inconsistency_is_not_checked_here() {
        let mut request: PredictionRequest = serde_json::from_str(scenario_b_json()).unwrap();
        request.years_at_company = 12;

        assert!(EmployeeRecord::try_from(request).is_ok());
    }

    #[test]
    fn test_record_to_request_keeps_values() {
        let record = EmployeeRecord::default();
        let request = PredictionRequest::from(record);
        assert_eq!(EmployeeRecord::try_from(request).unwrap(), record);
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result: Result<PredictionRequest, _> = serde_json::from_str(r#"{"OverTime": 0}"#);
        assert!(result.is_err());
    }
}
