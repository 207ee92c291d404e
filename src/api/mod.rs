//! HTTP API module for the Attrition Decision Engine.
//!
//! This module provides the REST API endpoints a front-end uses to draw the
//! input form and to run one prediction cycle per submission.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PredictionRequest;
pub use response::{ApiError, PredictionResponse, RISK_HEADING};
pub use state::AppState;
