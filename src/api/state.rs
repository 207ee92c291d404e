//! Application state for the Attrition Decision Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::classifier::Classifier;
use crate::config::DisplayConfig;

/// Shared application state.
///
/// Holds the classifier loaded once at startup and the display options.
/// Nothing here changes after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<dyn Classifier>,
    display: DisplayConfig,
}

impl AppState {
    /// Creates a new application state around a loaded classifier.
    pub fn new(classifier: impl Classifier + 'static, display: DisplayConfig) -> Self {
        Self::from_shared(Arc::new(classifier), display)
    }

    /// Creates a new application state from an already shared classifier.
    pub fn from_shared(classifier: Arc<dyn Classifier>, display: DisplayConfig) -> Self {
        Self {
            classifier,
            display,
        }
    }

    /// Returns the loaded classifier.
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Returns the display options.
    pub fn display(&self) -> DisplayConfig {
        self.display
    }
}
