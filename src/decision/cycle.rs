//! One interaction cycle: validate, then decide.
//!
//! ```text
//! Collecting -> Validating -> Blocked
//!                          -> Deciding -> Displayed
//! ```
//!
//! `Blocked` and `Displayed` are terminal. A new cycle only starts when the
//! operator submits again.

use serde::Serialize;
use tracing::debug;

use crate::classifier::Classifier;
use crate::error::{EngineError, EngineResult};
use crate::models::{DecisionResult, EmployeeRecord};
use crate::validation::validate;

use super::engine::decide;

/// The states a cycle moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// Input is being gathered.
    Collecting,
    /// Cross-field rules are being checked.
    Validating,
    /// Validation failed; the decision engine was not reached.
    Blocked,
    /// The classifier is being consulted.
    Deciding,
    /// A decision is ready to show.
    Displayed,
}

impl CyclePhase {
    /// Returns true for phases that end a cycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, CyclePhase::Blocked | CyclePhase::Displayed)
    }
}

/// How a completed cycle ended.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// The record was inconsistent. Violations are in rule order.
    Blocked {
        /// The violation messages.
        violations: Vec<String>,
    },
    /// The record was scored.
    Displayed(DecisionResult),
}

impl CycleOutcome {
    /// Returns the terminal phase this outcome represents.
    pub fn phase(&self) -> CyclePhase {
        match self {
            CycleOutcome::Blocked { .. } => CyclePhase::Blocked,
            CycleOutcome::Displayed(_) => CyclePhase::Displayed,
        }
    }

    /// Converts a blocked outcome into [`EngineError::Validation`].
    pub fn into_result(self) -> EngineResult<DecisionResult> {
        match self {
            CycleOutcome::Blocked { violations } => Err(EngineError::Validation { violations }),
            CycleOutcome::Displayed(result) => Ok(result),
        }
    }
}

/// Runs a full cycle for one collected record.
///
/// The classifier is never consulted when any consistency rule fails.
/// Classifier failures are returned as errors, separately from validation
/// outcomes.
///
/// # Examples
///
/// ```
/// use attrition_engine::classifier::{LogisticPipeline, PipelineArtifact, ScalerParams};
/// use attrition_engine::decision::{run_cycle, CycleOutcome};
/// use attrition_engine::models::{EmployeeRecord, FEATURE_NAMES};
///
/// let pipeline = LogisticPipeline::from_artifact(PipelineArtifact {
///     name: "flat".to_string(),
///     feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
///     scaler: ScalerParams { mean: vec![0.0; 11], scale: vec![1.0; 11] },
///     coefficients: vec![0.0; 11],
///     intercept: -1.0,
///     threshold: 0.5,
/// })
/// .unwrap();
///
/// let record = EmployeeRecord {
///     total_working_years: 10,
///     years_at_company: 12,
///     ..EmployeeRecord::default()
/// };
///
/// match run_cycle(&record, &pipeline).unwrap() {
///     CycleOutcome::Blocked { violations } => assert_eq!(violations.len(), 1),
///     CycleOutcome::Displayed(_) => unreachable!(),
/// }
/// ```
pub fn run_cycle(record: &EmployeeRecord, classifier: &dyn Classifier) -> EngineResult<CycleOutcome> {
    debug!(phase = ?CyclePhase::Validating, "Cycle advanced");
    let violations = validate(record);

    if !violations.is_empty() {
        debug!(
            phase = ?CyclePhase::Blocked,
            violations = violations.len(),
            "Cycle advanced"
        );
        return Ok(CycleOutcome::Blocked { violations });
    }

    debug!(phase = ?CyclePhase::Deciding, model = %classifier.name(), "Cycle advanced");
    let result = decide(record, classifier)?;

    debug!(
        phase = ?CyclePhase::Displayed,
        label = ?result.label,
        flags = result.risk_flags.len(),
        "Cycle advanced"
    );
    Ok(CycleOutcome::Displayed(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttritionLabel, FEATURE_NAMES, FeatureVector, MaritalStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls so tests can prove the classifier was skipped.
    struct CountingClassifier {
        names: Vec<String>,
        class: u8,
        calls: AtomicUsize,
    }

    impl CountingClassifier {
        fn new(class: u8) -> Self {
            Self {
                names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
                class,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Classifier for CountingClassifier {
        fn name(&self) -> &str {
            "counting"
        }

        fn feature_names(&self) -> &[String] {
            &self.names
        }

        fn predict(&self, _features: &FeatureVector) -> EngineResult<u8> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.class)
        }

        fn predict_probability(&self, _features: &FeatureVector) -> EngineResult<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(if self.class == 1 { 0.8 } else { 0.2 })
        }
    }

    fn scenario_record(
        over_time: bool,
        years_at_company: u32,
        job_satisfaction: u8,
        work_life_balance: u8,
    ) -> EmployeeRecord {
        EmployeeRecord {
            over_time,
            total_working_years: 10,
            job_level: 2,
            years_at_company,
            monthly_income: 4000,
            age: 29,
            marital_status: MaritalStatus::Single,
            years_with_curr_manager: 2,
            years_in_current_role: 3,
            job_satisfaction,
            work_life_balance,
        }
    }

    /// Scenario A: years at company exceed career, cycle is blocked
    #[test]
    fn test_scenario_a_is_blocked_before_deciding() {
        let record = scenario_record(true, 12, 2, 2);
        let classifier = CountingClassifier::new(1);

        let outcome = run_cycle(&record, &classifier).unwrap();

        assert_eq!(outcome.phase(), CyclePhase::Blocked);
        match outcome {
            CycleOutcome::Blocked { violations } => assert_eq!(
                violations,
                vec!["Years at Company cannot exceed Total Working Years."]
            ),
            other => panic!("Expected Blocked, got {:?}", other),
        }
        assert_eq!(classifier.calls(), 0);
    }

    /// Scenario B: consistent record, class 0, no flags
    #[test]
    fn test_scenario_b_displays_stay_without_flags() {
        let record = scenario_record(false, 5, 4, 4);
        let classifier = CountingClassifier::new(0);

        let outcome = run_cycle(&record, &classifier).unwrap();

        assert_eq!(outcome.phase(), CyclePhase::Displayed);
        let result = outcome.into_result().unwrap();
        assert_eq!(result.label, AttritionLabel::Stay);
        assert!(result.risk_flags.is_empty());
        assert!(classifier.calls() > 0);
    }

    /// Scenario C: overtime and low satisfaction flagged, for either label
    #[test]
    fn test_scenario_c_flags_regardless_of_label() {
        let record = scenario_record(true, 5, 1, 4);
        let expected = vec![
            "Employee is doing overtime frequently.",
            "Low job satisfaction may increase attrition risk.",
        ];

        for class in [0, 1] {
            let classifier = CountingClassifier::new(class);
            let result = run_cycle(&record, &classifier)
                .unwrap()
                .into_result()
                .unwrap();
            assert_eq!(result.risk_flags, expected);
        }
    }

    #[test]
    fn test_blocked_outcome_converts_to_validation_error() {
        let record = scenario_record(false, 12, 4, 4);
        let outcome = run_cycle(&record, &CountingClassifier::new(0)).unwrap();

        match outcome.into_result() {
            Err(EngineError::Validation { violations }) => assert_eq!(violations.len(), 1),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(CyclePhase::Blocked.is_terminal());
        assert!(CyclePhase::Displayed.is_terminal());
        assert!(!CyclePhase::Collecting.is_terminal());
        assert!(!CyclePhase::Validating.is_terminal());
        assert!(!CyclePhase::Deciding.is_terminal());
    }
}
