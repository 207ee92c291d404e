//! Core data models for the Attrition Decision Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod decision_result;
mod employee;
mod form;

pub use decision_result::{AttritionLabel, AuditStep, AuditTrace, DecisionResult};
pub use employee::{EmployeeRecord, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, MaritalStatus};
pub use form::{EnteredValue, FieldSpec, check_domains, entered_values, form_fields};
