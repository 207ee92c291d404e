//! The decision step: classifier call, label mapping, and risk flags.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::classifier::Classifier;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttritionLabel, AuditStep, AuditTrace, DecisionResult, EmployeeRecord};

use super::risk_flags::assess_risk;

/// Scores a validated record and derives its risk flags.
///
/// The label comes from [`Classifier::predict`] alone (1 is Leave, 0 is
/// Stay); the probability is carried through as reported and is never
/// compared against a threshold here. Any classifier failure aborts the
/// decision with [`EngineError::ClassifierUnavailable`]; no partial result
/// is produced and the call is not retried.
///
/// Only call this for records that passed [`crate::validation::validate`];
/// [`super::run_cycle`] enforces that ordering.
pub fn decide(record: &EmployeeRecord, classifier: &dyn Classifier) -> EngineResult<DecisionResult> {
    let start_time = Instant::now();
    let features = record.features();

    let class = classifier.predict(&features)?;
    let label = AttritionLabel::from_class(class).ok_or_else(|| {
        EngineError::classifier(format!(
            "model '{}' returned unknown class {}",
            classifier.name(),
            class
        ))
    })?;

    let probability = classifier.predict_probability(&features)?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(EngineError::classifier(format!(
            "model '{}' returned probability {} outside [0, 1]",
            classifier.name(),
            probability
        )));
    }

    let classifier_step = AuditStep {
        step_number: 1,
        rule_id: "attrition_classifier".to_string(),
        rule_name: "Attrition Classifier".to_string(),
        input: serde_json::Value::Object(
            record
                .named_values()
                .map(|(name, value)| (name.to_string(), value.into()))
                .collect(),
        ),
        output: serde_json::json!({
            "class": class,
            "label": label,
            "probability": probability
        }),
        reasoning: format!(
            "Model '{}' predicted class {} ({:?}) with P(Leave) = {:.4}",
            classifier.name(),
            class,
            label,
            probability
        ),
    };

    let risk = assess_risk(record, 2);

    let mut steps = Vec::with_capacity(1 + risk.audit_steps.len());
    steps.push(classifier_step);
    steps.extend(risk.audit_steps);

    Ok(DecisionResult {
        decision_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        label,
        probability,
        risk_flags: risk.flags,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
