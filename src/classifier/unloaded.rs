//! Stand-in used when the classifier artifact could not be loaded.

use crate::error::{EngineError, EngineResult};
use crate::models::{FEATURE_NAMES, FeatureVector};

use super::Classifier;

/// A classifier that fails every call with the original load error.
///
/// The service keeps running with this in place: consistency checks still
/// answer, and every cycle that reaches the decision step fails with
/// [`EngineError::ClassifierUnavailable`].
#[derive(Debug, Clone)]
pub struct UnloadedClassifier {
    reason: String,
    names: Vec<String>,
}

impl UnloadedClassifier {
    /// Creates a stand-in that reports `reason` on every call.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl Classifier for UnloadedClassifier {
    fn name(&self) -> &str {
        "unloaded"
    }

    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn predict(&self, _features: &FeatureVector) -> EngineResult<u8> {
        Err(EngineError::classifier(self.reason.clone()))
    }

    fn predict_probability(&self, _features: &FeatureVector) -> EngineResult<f64> {
        Err(EngineError::classifier(self.reason.clone()))
    }

    fn unavailable_reason(&self) -> Option<&str> {
        Some(&self.reason)
    }
}
