//! Decision result models for the Attrition Decision Engine.
//!
//! This module contains the [`DecisionResult`] type and its associated
//! structures that capture all outputs of one decision cycle: the predicted
//! label, the classifier's probability, the risk flags, and an audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The predicted attrition outcome.
///
/// # Example
///
/// ```
/// use attrition_engine::models::AttritionLabel;
///
/// assert_eq!(AttritionLabel::from_class(1), Some(AttritionLabel::Leave));
/// assert_eq!(AttritionLabel::from_class(0), Some(AttritionLabel::Stay));
/// assert_eq!(AttritionLabel::from_class(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttritionLabel {
    /// The employee is likely to stay (class 0).
    Stay,
    /// The employee is likely to leave (class 1).
    Leave,
}

impl AttritionLabel {
    /// Maps a classifier class to a label. Only 0 and 1 are valid classes.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(AttritionLabel::Stay),
            1 => Some(AttritionLabel::Leave),
            _ => None,
        }
    }

    /// Returns the class this label was produced from.
    pub fn class(self) -> u8 {
        match self {
            AttritionLabel::Stay => 0,
            AttritionLabel::Leave => 1,
        }
    }

    /// Returns how the label is presented: `"alert"` for Leave, `"success"` for Stay.
    pub fn display_state(self) -> &'static str {
        match self {
            AttritionLabel::Stay => "success",
            AttritionLabel::Leave => "alert",
        }
    }

    /// Returns the one-line message shown for the label.
    pub fn headline(self) -> &'static str {
        match self {
            AttritionLabel::Stay => "Likely to stay.",
            AttritionLabel::Leave => "Likely to leave.",
        }
    }
}

/// A single step in the audit trace recording a decision rule.
///
/// Each step captures the input, output, and reasoning for one rule or for
/// the classifier call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of decision steps.
    pub steps: Vec<AuditStep>,
    /// The total decision duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one decision cycle.
///
/// The `label` comes from the classifier's `predict` and is authoritative;
/// `probability` is carried through for information only. `risk_flags` are
/// heuristic annotations and never influence either.
///
/// # Example
///
/// ```
/// use attrition_engine::models::{AttritionLabel, AuditTrace, DecisionResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = DecisionResult {
///     decision_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     label: AttritionLabel::Stay,
///     probability: 0.12,
///     risk_flags: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(!result.has_risk_flags());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Unique identifier for this decision.
    pub decision_id: Uuid,
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that made the decision.
    pub engine_version: String,
    /// The predicted label.
    pub label: AttritionLabel,
    /// Probability of the Leave class, as reported by the classifier.
    pub probability: f64,
    /// Risk indicators derived from the raw input, in rule order.
    pub risk_flags: Vec<String>,
    /// Audit trace of the decision.
    pub audit_trace: AuditTrace,
}

impl DecisionResult {
    /// Returns true if any risk rule fired.
    pub fn has_risk_flags(&self) -> bool {
        !self.risk_flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_result(label: AttritionLabel, risk_flags: Vec<String>) -> DecisionResult {
        DecisionResult {
            decision_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            label,
            probability: 0.73,
            risk_flags,
            audit_trace: AuditTrace {
                steps: vec![AuditStep {
                    step_number: 1,
                    rule_id: "classifier".to_string(),
                    rule_name: "Attrition Classifier".to_string(),
                    input: serde_json::json!({ "OverTime": 1 }),
                    output: serde_json::json!({ "class": 1 }),
                    reasoning: "Classifier predicted class 1".to_string(),
                }],
                duration_us: 42,
            },
        }
    }

    #[test]
    fn test_label_mapping_is_exact() {
        assert_eq!(AttritionLabel::from_class(1), Some(AttritionLabel::Leave));
        assert_eq!(AttritionLabel::from_class(0), Some(AttritionLabel::Stay));
        assert_eq!(AttritionLabel::from_class(2), None);
        assert_eq!(AttritionLabel::Leave.class(), 1);
        assert_eq!(AttritionLabel::Stay.class(), 0);
    }

    #[test]
    fn test_display_state_and_headline() {
        assert_eq!(AttritionLabel::Leave.display_state(), "alert");
        assert_eq!(AttritionLabel::Stay.display_state(), "success");
        assert_eq!(AttritionLabel::Leave.headline(), "Likely to leave.");
        assert_eq!(AttritionLabel::Stay.headline(), "Likely to stay.");
    }

    #[test]
    fn test_label_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&AttritionLabel::Leave).unwrap(),
            "\"Leave\""
        );
        assert_eq!(
            serde_json::to_string(&AttritionLabel::Stay).unwrap(),
            "\"Stay\""
        );
    }

    #[test]
    fn test_has_risk_flags() {
        let flagged = create_sample_result(
            AttritionLabel::Leave,
            vec!["Employee is doing overtime frequently.".to_string()],
        );
        let clean = create_sample_result(AttritionLabel::Stay, vec![]);

        assert!(flagged.has_risk_flags());
        assert!(!clean.has_risk_flags());
    }

    #[test]
    fn test_result_serialization_includes_audit_trace() {
        let result = create_sample_result(AttritionLabel::Leave, vec![]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["label"], "Leave");
        assert_eq!(json["audit_trace"]["steps"][0]["rule_id"], "classifier");
        assert_eq!(json["audit_trace"]["duration_us"], 42);
    }
}
