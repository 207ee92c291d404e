//! HTTP request handlers for the Attrition Decision Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::decision::{CycleOutcome, CyclePhase, run_cycle};
use crate::error::EngineError;
use crate::models::{EmployeeRecord, form_fields};

use super::request::PredictionRequest;
use super::response::{ApiError, ApiErrorResponse, PredictionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/form", get(form_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /predict endpoint.
///
/// Runs one cycle for the submitted record and returns the decision view,
/// or the violations that blocked it.
async fn predict_handler(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing prediction request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::missing_field(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    debug!(correlation_id = %correlation_id, phase = ?CyclePhase::Collecting, "Cycle advanced");

    // Per-field domain checks happen at the collection boundary
    let record = match EmployeeRecord::try_from(request) {
        Ok(record) => record,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee record rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match run_cycle(&record, state.classifier()) {
        Ok(CycleOutcome::Displayed(result)) => {
            info!(
                correlation_id = %correlation_id,
                decision_id = %result.decision_id,
                label = ?result.label,
                risk_flags = result.risk_flags.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Decision completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(PredictionResponse::new(&record, result, state.display())),
            )
                .into_response()
        }
        Ok(CycleOutcome::Blocked { violations }) => {
            info!(
                correlation_id = %correlation_id,
                violations = violations.len(),
                "Cycle blocked by input inconsistencies"
            );
            ApiErrorResponse::from(EngineError::Validation { violations }).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Decision failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /form endpoint.
///
/// Returns the field descriptors a front-end needs to draw the collector.
async fn form_handler() -> impl IntoResponse {
    Json(form_fields())
}

/// Handler for GET /health endpoint.
///
/// The service stays up without a classifier; that is reported as
/// `degraded` with the load error rather than as a failed probe.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let classifier = state.classifier();
    let mut body = serde_json::json!({
        "status": "ok",
        "model": classifier.name(),
        "engine_version": env!("CARGO_PKG_VERSION"),
    });
    if let Some(reason) = classifier.unavailable_reason() {
        body["status"] = "degraded".into();
        body["classifier_error"] = reason.into();
    }
    Json(body)
}
