//! Standard-scaler + logistic-regression pipeline.
//!
//! The pipeline is trained elsewhere and exported as a YAML artifact:
//!
//! ```yaml
//! name: employee_attrition_placeholder_11feat
//! feature_names: [OverTime, TotalWorkingYears, ...]
//! scaler:
//!   mean: [...]
//!   scale: [...]
//! coefficients: [...]
//! intercept: -2.1
//! threshold: 0.5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::FeatureVector;

use super::Classifier;

fn default_threshold() -> f64 {
    0.5
}

/// Per-feature standardization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Mean subtracted from each feature.
    pub mean: Vec<f64>,
    /// Divisor applied after centering. Must be non-zero.
    pub scale: Vec<f64>,
}

/// The on-disk form of a trained pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    /// Model name, reported in logs and health output.
    pub name: String,
    /// Feature names in the column order used for training.
    pub feature_names: Vec<String>,
    /// Standardization applied before the linear model.
    pub scaler: ScalerParams,
    /// One weight per feature.
    pub coefficients: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
    /// Probability at or above which class 1 is predicted.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// A loaded, validated logistic-regression pipeline.
#[derive(Debug, Clone)]
pub struct LogisticPipeline {
    artifact: PipelineArtifact,
}

impl LogisticPipeline {
    /// Validates an artifact's internal consistency and wraps it.
    ///
    /// Every per-feature vector must have one entry per feature name, scales
    /// must be finite and non-zero, and the threshold must lie in (0, 1).
    pub fn from_artifact(artifact: PipelineArtifact) -> EngineResult<Self> {
        let width = artifact.feature_names.len();

        for (label, len) in [
            ("scaler.mean", artifact.scaler.mean.len()),
            ("scaler.scale", artifact.scaler.scale.len()),
            ("coefficients", artifact.coefficients.len()),
        ] {
            if len != width {
                return Err(EngineError::classifier(format!(
                    "artifact '{}' has {} {} for {} features",
                    artifact.name, len, label, width
                )));
            }
        }

        if let Some(index) = artifact
            .scaler
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(EngineError::classifier(format!(
                "artifact '{}' has an unusable scale for feature '{}'",
                artifact.name, artifact.feature_names[index]
            )));
        }

        let parameters_finite = artifact.intercept.is_finite()
            && artifact.scaler.mean.iter().all(|v| v.is_finite())
            && artifact.coefficients.iter().all(|v| v.is_finite());
        if !parameters_finite {
            return Err(EngineError::classifier(format!(
                "artifact '{}' contains non-finite parameters",
                artifact.name
            )));
        }

        if !(artifact.threshold > 0.0 && artifact.threshold < 1.0) {
            return Err(EngineError::classifier(format!(
                "artifact '{}' has threshold {} outside (0, 1)",
                artifact.name, artifact.threshold
            )));
        }

        Ok(Self { artifact })
    }

    /// Returns the underlying artifact.
    pub fn artifact(&self) -> &PipelineArtifact {
        &self.artifact
    }

    /// Returns the decision threshold.
    pub fn threshold(&self) -> f64 {
        self.artifact.threshold
    }

    /// Linear score before the logistic link.
    fn decision_function(&self, features: &FeatureVector) -> EngineResult<f64> {
        let expected = self.artifact.feature_names.len();
        if features.len() != expected {
            return Err(EngineError::classifier(format!(
                "model '{}' expects {} features, got {}",
                self.artifact.name,
                expected,
                features.len()
            )));
        }

        let scaler = &self.artifact.scaler;
        let score = features
            .iter()
            .zip(&scaler.mean)
            .zip(&scaler.scale)
            .zip(&self.artifact.coefficients)
            .map(|(((x, mean), scale), coef)| coef * (x - mean) / scale)
            .sum::<f64>()
            + self.artifact.intercept;

        Ok(score)
    }
}

impl Classifier for LogisticPipeline {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    fn predict(&self, features: &FeatureVector) -> EngineResult<u8> {
        let probability = self.predict_probability(features)?;
        Ok(u8::from(probability >= self.artifact.threshold))
    }

    fn predict_probability(&self, features: &FeatureVector) -> EngineResult<f64> {
        let score = self.decision_function(features)?;
        Ok(1.0 / (1.0 + (-score).exp()))
    }
}

/// Loads a pipeline artifact from a YAML file.
///
/// Any failure (missing file, bad YAML, inconsistent parameters) is reported
/// as [`EngineError::ClassifierUnavailable`].
pub fn load_pipeline<P: AsRef<Path>>(path: P) -> EngineResult<LogisticPipeline> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading classifier artifact");

    let content = fs::read_to_string(path).map_err(|e| {
        EngineError::classifier(format!("cannot read artifact {}: {}", path.display(), e))
    })?;

    let artifact: PipelineArtifact = serde_yaml::from_str(&content).map_err(|e| {
        EngineError::classifier(format!("cannot parse artifact {}: {}", path.display(), e))
    })?;

    let pipeline = LogisticPipeline::from_artifact(artifact)?;

    info!(
        model = %pipeline.name(),
        features = pipeline.feature_names().len(),
        threshold = pipeline.threshold(),
        "Classifier loaded successfully"
    );

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRecord, FEATURE_NAMES};

    fn create_artifact(coefficients: Vec<f64>, intercept: f64) -> PipelineArtifact {
        PipelineArtifact {
            name: "test_model".to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            scaler: ScalerParams {
                mean: vec![0.0; 11],
                scale: vec![1.0; 11],
            },
            coefficients,
            intercept,
            threshold: 0.5,
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_model_gives_even_odds() {
        let pipeline = LogisticPipeline::from_artifact(create_artifact(vec![0.0; 11], 0.0)).unwrap();
        let features = EmployeeRecord::default().features();

        let probability = pipeline.predict_probability(&features).unwrap();
        assert!(approx_eq(probability, 0.5));
        // Threshold is inclusive.
        assert_eq!(pipeline.predict(&features).unwrap(), 1);
    }

    #[test]
    fn test_overtime_weight_raises_probability() {
        let mut coefficients = vec![0.0; 11];
        coefficients[0] = 2.0;
        let pipeline = LogisticPipeline::from_artifact(create_artifact(coefficients, -1.0)).unwrap();

        let without = EmployeeRecord::default();
        let with = EmployeeRecord {
            over_time: true,
            ..without
        };

        let p_without = pipeline.predict_probability(&without.features()).unwrap();
        let p_with = pipeline.predict_probability(&with.features()).unwrap();

        // sigmoid(-1) and sigmoid(1)
        assert!(approx_eq(p_without, 1.0 / (1.0 + 1.0f64.exp())));
        assert!(approx_eq(p_with, 1.0 / (1.0 + (-1.0f64).exp())));
        assert_eq!(pipeline.predict(&without.features()).unwrap(), 0);
        assert_eq!(pipeline.predict(&with.features()).unwrap(), 1);
    }

    #[test]
    fn test_scaler_is_applied_before_weights() {
        let mut artifact = create_artifact(vec![0.0; 11], 0.0);
        artifact.coefficients[4] = 1.0;
        artifact.scaler.mean[4] = 5000.0;
        artifact.scaler.scale[4] = 1000.0;
        let pipeline = LogisticPipeline::from_artifact(artifact).unwrap();

        let record = EmployeeRecord {
            monthly_income: 7000,
            ..EmployeeRecord::default()
        };
        let probability = pipeline.predict_probability(&record.features()).unwrap();

        // (7000 - 5000) / 1000 = 2.0
        assert!(approx_eq(probability, 1.0 / (1.0 + (-2.0f64).exp())));
    }

    #[test]
    fn test_predict_agrees_with_probability_threshold() {
        let mut coefficients = vec![0.0; 11];
        coefficients[9] = -0.8;
        let pipeline = LogisticPipeline::from_artifact(create_artifact(coefficients, 2.0)).unwrap();

        for satisfaction in 1..=4u8 {
            let record = EmployeeRecord {
                job_satisfaction: satisfaction,
                ..EmployeeRecord::default()
            };
            let features = record.features();
            let probability = pipeline.predict_probability(&features).unwrap();
            let class = pipeline.predict(&features).unwrap();
            assert_eq!(class == 1, probability >= 0.5);
        }
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let artifact = create_artifact(vec![0.0; 10], 0.0);
        match LogisticPipeline::from_artifact(artifact) {
            Err(EngineError::ClassifierUnavailable { message }) => {
                assert!(message.contains("coefficients"));
            }
            other => panic!("Expected ClassifierUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let mut artifact = create_artifact(vec![0.0; 11], 0.0);
        artifact.scaler.scale[5] = 0.0;
        match LogisticPipeline::from_artifact(artifact) {
            Err(EngineError::ClassifierUnavailable { message }) => {
                assert!(message.contains("Age"));
            }
            other => panic!("Expected ClassifierUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        let artifact = create_artifact(vec![0.0; 11], f64::NAN);
        assert!(LogisticPipeline::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_threshold_outside_unit_interval_is_rejected() {
        let mut artifact = create_artifact(vec![0.0; 11], 0.0);
        artifact.threshold = 1.0;
        assert!(LogisticPipeline::from_artifact(artifact).is_err());
    }

    #[test]
    fn test_wrong_width_model_fails_at_prediction() {
        let mut artifact = create_artifact(vec![0.0; 11], 0.0);
        artifact.feature_names.push("Extra".to_string());
        artifact.scaler.mean.push(0.0);
        artifact.scaler.scale.push(1.0);
        artifact.coefficients.push(0.0);
        let pipeline = LogisticPipeline::from_artifact(artifact).unwrap();

        let result = pipeline.predict(&EmployeeRecord::default().features());
        match result {
            Err(EngineError::ClassifierUnavailable { message }) => {
                assert!(message.contains("expects 12 features, got 11"));
            }
            other => panic!("Expected ClassifierUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_defaults_when_absent() {
        let yaml = r#"
name: tiny
feature_names: [OverTime, TotalWorkingYears, JobLevel, YearsAtCompany, MonthlyIncome, Age,
                MaritalStatus, YearsWithCurrManager, YearsInCurrentRole, JobSatisfaction,
                WorkLifeBalance]
scaler:
  mean: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
  scale: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
coefficients: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
intercept: 0
"#;
        let artifact: PipelineArtifact = serde_yaml::from_str(yaml).unwrap();
        assert!(approx_eq(artifact.threshold, 0.5));
    }

    #[test]
    fn test_load_missing_artifact_is_unavailable() {
        let result = load_pipeline("/nonexistent/model.yaml");
        match result {
            Err(EngineError::ClassifierUnavailable { message }) => {
                assert!(message.contains("/nonexistent/model.yaml"));
            }
            other => panic!("Expected ClassifierUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bundled_artifact() {
        let pipeline = load_pipeline("./config/attrition/model.yaml").unwrap();
        assert_eq!(pipeline.name(), "employee_attrition_placeholder_11feat");
        assert_eq!(pipeline.feature_names().len(), 11);
    }
}
