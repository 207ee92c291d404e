//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML and for loading the classifier it points at.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::classifier::{
    Classifier, LogisticPipeline, UnloadedClassifier, check_contract, load_pipeline,
};
use crate::error::{EngineError, EngineResult};

use super::types::{DisplayConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/attrition/
/// ├── service.yaml   # Server, model location, display and logging options
/// └── model.yaml     # Trained pipeline artifact
/// ```
///
/// # Example
///
/// ```no_run
/// use attrition_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attrition").unwrap();
/// let classifier = loader.load_classifier().unwrap();
/// println!("Listening on {}", loader.config().server.bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attrition")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if `service.yaml` is
    /// missing or cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let root = path.as_ref().to_path_buf();
        let config = Self::load_yaml::<ServiceConfig>(&root.join("service.yaml"))?;
        Ok(Self { root, config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the parsed service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the display options.
    pub fn display(&self) -> DisplayConfig {
        self.config.display
    }

    /// Returns the resolved path of the classifier artifact.
    pub fn artifact_path(&self) -> PathBuf {
        let configured = &self.config.model.artifact_path;
        if configured.is_absolute() {
            configured.clone()
        } else {
            self.root.join(configured)
        }
    }

    /// Overrides the bind address (e.g., from the environment).
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.config.server.bind_address = bind_address.into();
        self
    }

    /// Loads the classifier artifact and checks its feature contract.
    ///
    /// Fails with `ClassifierUnavailable` if the artifact cannot be loaded and
    /// with `ClassifierContractMismatch` if its columns differ from the
    /// engine's.
    pub fn load_classifier(&self) -> EngineResult<LogisticPipeline> {
        let pipeline = load_pipeline(self.artifact_path())?;
        check_contract(&pipeline)?;
        Ok(pipeline)
    }

    /// Loads the classifier for serving.
    ///
    /// An artifact that cannot be loaded does not stop the service: it is
    /// replaced by an [`UnloadedClassifier`] so each cycle fails on its own
    /// while consistency checks keep working. A contract mismatch is still
    /// returned as an error.
    pub fn load_serving_classifier(&self) -> EngineResult<Arc<dyn Classifier>> {
        match self.load_classifier() {
            Ok(pipeline) => Ok(Arc::new(pipeline)),
            Err(EngineError::ClassifierUnavailable { message }) => {
                warn!(
                    path = %self.artifact_path().display(),
                    error = %message,
                    "Classifier unavailable, serving in degraded mode"
                );
                Ok(Arc::new(UnloadedClassifier::new(message)))
            }
            Err(err) => Err(err),
        }
    }
}
