//! Response types for the Attrition Decision Engine API.
//!
//! This module defines the decision view returned by `/predict`, the error
//! response structures, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DisplayConfig;
use crate::error::EngineError;
use crate::models::{
    AttritionLabel, AuditTrace, DecisionResult, EmployeeRecord, EnteredValue, entered_values,
};

/// Heading shown above the risk flags when at least one fired.
pub const RISK_HEADING: &str = "Key Risk Indicators";

/// Heading shown above the echoed input record.
pub const ENTERED_HEADING: &str = "Employee Data Entered";

/// Message shown above the violation list when a cycle is blocked.
pub const BLOCKED_MESSAGE: &str = "Please correct the following input inconsistencies:";

/// The decision view returned by a successful `/predict` call.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// Unique identifier for this decision.
    pub decision_id: Uuid,
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that made the decision.
    pub engine_version: String,
    /// The predicted label.
    pub label: AttritionLabel,
    /// "alert" for Leave, "success" for Stay.
    pub display_state: &'static str,
    /// Short sentence describing the label.
    pub headline: &'static str,
    /// P(Leave), present only when enabled in configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Present only when `risk_flags` is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_heading: Option<&'static str>,
    /// Risk indicators, in rule order.
    pub risk_flags: Vec<String>,
    /// Heading for the `employee` panel.
    pub employee_heading: &'static str,
    /// The input record, labelled for display.
    pub employee: Vec<EnteredValue>,
    /// Audit trace of the decision.
    pub audit_trace: AuditTrace,
}

impl PredictionResponse {
    /// Builds the view for a decision on `record`.
    pub fn new(record: &EmployeeRecord, result: DecisionResult, display: DisplayConfig) -> Self {
        let risk_heading = result.has_risk_flags().then_some(RISK_HEADING);

        Self {
            decision_id: result.decision_id,
            timestamp: result.timestamp,
            engine_version: result.engine_version,
            label: result.label,
            display_state: result.label.display_state(),
            headline: result.label.headline(),
            probability: display.show_probability.then_some(result.probability),
            risk_heading,
            risk_flags: result.risk_flags,
            employee_heading: ENTERED_HEADING,
            employee: entered_values(record),
            audit_trace: result.audit_trace,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Violation messages for a blocked cycle, in rule order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            violations: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates the response for a blocked cycle.
    pub fn validation_error(violations: Vec<String>) -> Self {
        Self {
            violations,
            ..Self::new("VALIDATION_ERROR", BLOCKED_MESSAGE)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::with_details(
            "MISSING_FIELD",
            message,
            "Every employee field must be provided in the request",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidField { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FIELD",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains a value outside its allowed range",
                ),
            },
            EngineError::Validation { violations } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::validation_error(violations),
            },
            EngineError::ClassifierUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "CLASSIFIER_UNAVAILABLE",
                    "The prediction could not be made",
                    message,
                ),
            },
            err @ EngineError::ClassifierContractMismatch { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CLASSIFIER_CONTRACT_MISMATCH",
                    "Classifier is misconfigured",
                    err.to_string(),
                ),
            },
        }
    }
}
