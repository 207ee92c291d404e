//! Decision logic for the Attrition Decision Engine.
//!
//! This module turns a validated [`crate::models::EmployeeRecord`] into a
//! [`crate::models::DecisionResult`]: the classifier's label and probability
//! plus rule-based risk flags. [`run_cycle`] ties validation and decision
//! together into a single request/response cycle.

mod cycle;
mod engine;
mod risk_flags;

pub use cycle::{CycleOutcome, CyclePhase, run_cycle};
pub use engine::decide;
pub use risk_flags::{
    LOW_SCORE_CEILING, RISK_RULES, RiskAssessment, RiskRule, assess_risk, derive_risk_flags,
};
