//! Configuration types for the decision service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `service.yaml`.

use serde::Deserialize;
use std::path::PathBuf;

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Location of the classifier artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the pipeline artifact, relative to the configuration directory
    /// unless absolute.
    pub artifact_path: PathBuf,
}

/// Presentation options for decision responses.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DisplayConfig {
    /// Whether responses include the Leave probability.
    #[serde(default)]
    pub show_probability: bool,
}

/// Logging options.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set (e.g., "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// The complete service configuration from `service.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Classifier artifact settings.
    pub model: ModelConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let yaml = "model:\n  artifact_path: model.yaml\n";
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.model.artifact_path, PathBuf::from("model.yaml"));
        assert!(!config.display.show_probability);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_model_section_is_an_error() {
        let yaml = "server:\n  bind_address: 0.0.0.0:9000\n";
        let result: Result<ServiceConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
