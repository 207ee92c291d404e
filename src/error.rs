//! Error types for the Attrition Decision Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while collecting, validating,
//! and deciding on an employee record.

use thiserror::Error;

/// The main error type for the Attrition Decision Engine.
///
/// Validation failures and classifier failures are separate variants so a
/// caller can never confuse an operator-correctable input problem with an
/// unavailable model.
///
/// # Example
///
/// ```
/// use attrition_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A single employee field was outside its domain.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidField {
        /// The feature name of the invalid field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// One or more cross-field consistency rules were violated.
    #[error("Input inconsistencies: {}", violations.join(" "))]
    Validation {
        /// The violation messages, in rule order.
        violations: Vec<String>,
    },

    /// The classifier failed to load or failed while scoring a record.
    #[error("Classifier unavailable: {message}")]
    ClassifierUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// The classifier expects a different feature layout than the engine provides.
    #[error("Classifier feature contract mismatch: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    ClassifierContractMismatch {
        /// The feature names the engine submits, in order.
        expected: Vec<String>,
        /// The feature names the classifier was built for, in order.
        found: Vec<String>,
    },
}

impl EngineError {
    /// Shorthand for a [`EngineError::ClassifierUnavailable`] error.
    pub fn classifier(message: impl Into<String>) -> Self {
        Self::ClassifierUnavailable {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
