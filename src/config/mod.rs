//! Configuration loading and management for the Attrition Decision Engine.
//!
//! This module loads the service configuration from YAML: the bind address,
//! the location of the classifier artifact, display options, and the default
//! log level.
//!
//! # Example
//!
//! ```no_run
//! use attrition_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attrition").unwrap();
//! println!("Model artifact: {}", config.artifact_path().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DisplayConfig, LoggingConfig, ModelConfig, ServerConfig, ServiceConfig};
