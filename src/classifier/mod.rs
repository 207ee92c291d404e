//! The classifier collaborator.
//!
//! The engine only depends on the narrow [`Classifier`] trait: a class
//! prediction and the probability of the Leave class for one feature row.
//! [`LogisticPipeline`] is the bundled implementation, loaded once at startup
//! from a YAML artifact. [`UnloadedClassifier`] stands in when that load fails.

mod pipeline;
mod unloaded;

pub use pipeline::{LogisticPipeline, PipelineArtifact, ScalerParams, load_pipeline};
pub use unloaded::UnloadedClassifier;

use crate::error::{EngineError, EngineResult};
use crate::models::{FEATURE_NAMES, FeatureVector};

/// A pre-trained binary classifier over the eleven-feature contract.
///
/// Implementations are read-only once constructed and are shared across
/// requests, hence the `Send + Sync` bound.
pub trait Classifier: Send + Sync {
    /// A short name for logs and health output.
    fn name(&self) -> &str;

    /// The feature names the classifier was trained on, in column order.
    fn feature_names(&self) -> &[String];

    /// Predicts the class for one row: 1 for Leave, 0 for Stay.
    fn predict(&self, features: &FeatureVector) -> EngineResult<u8>;

    /// Returns the probability of class 1 (Leave) for one row.
    fn predict_probability(&self, features: &FeatureVector) -> EngineResult<f64>;

    /// Why the classifier cannot score records, if it cannot.
    fn unavailable_reason(&self) -> Option<&str> {
        None
    }
}

/// Verifies that a classifier expects exactly the engine's feature layout.
///
/// Run once at startup; a mismatch is a configuration error, not an input error.
///
/// # Examples
///
/// ```
/// use attrition_engine::classifier::{check_contract, LogisticPipeline, PipelineArtifact, ScalerParams};
/// use attrition_engine::models::FEATURE_NAMES;
///
/// let artifact = PipelineArtifact {
///     name: "flat".to_string(),
///     feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
///     scaler: ScalerParams { mean: vec![0.0; 11], scale: vec![1.0; 11] },
///     coefficients: vec![0.0; 11],
///     intercept: 0.0,
///     threshold: 0.5,
/// };
/// let pipeline = LogisticPipeline::from_artifact(artifact).unwrap();
/// assert!(check_contract(&pipeline).is_ok());
/// ```
pub fn check_contract(classifier: &dyn Classifier) -> EngineResult<()> {
    let found = classifier.feature_names();
    if found.iter().map(String::as_str).eq(FEATURE_NAMES) {
        return Ok(());
    }

    Err(EngineError::ClassifierContractMismatch {
        expected: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
        found: found.to_vec(),
    })
}
