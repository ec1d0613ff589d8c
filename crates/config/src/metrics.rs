// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::Deserialize;

/// Configuration for Prometheus metrics collection
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    ///
    /// Env: ANTHEM_METRICS_ENABLED
    /// Default: false
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: ANTHEM_METRICS_PROMETHEUS_PREFIX
    /// Default: anthem_rest_api
    #[serde(default = "default_prometheus_prefix")]
    pub prometheus_prefix: String,

    /// Include query parameters in route labels
    ///
    /// Env: ANTHEM_METRICS_INCLUDE_QUERYPARAMS
    /// Default: false
    #[serde(default = "default_include_queryparams")]
    pub include_queryparams: bool,
}

fn default_enabled() -> bool {
    false
}

fn default_prometheus_prefix() -> String {
    "anthem_rest_api".to_string()
}

fn default_include_queryparams() -> bool {
    false
}

impl MetricsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        // Prometheus rejects metric names outside [a-zA-Z_:][a-zA-Z0-9_:]*,
        // so catch a bad prefix here instead of at scrape time
        if let Some(first_char) = self.prometheus_prefix.chars().next() {
            if !first_char.is_ascii_alphabetic() && first_char != '_' && first_char != ':' {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid Prometheus prefix '{}': must start with [a-zA-Z_:]",
                    self.prometheus_prefix
                )));
            }

            for ch in self.prometheus_prefix.chars() {
                if !ch.is_ascii_alphanumeric() && ch != '_' && ch != ':' {
                    return Err(ConfigError::ValidateError(format!(
                        "Invalid Prometheus prefix '{}': must contain only [a-zA-Z0-9_:]",
                        self.prometheus_prefix
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            prometheus_prefix: default_prometheus_prefix(),
            include_queryparams: default_include_queryparams(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_config() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.prometheus_prefix, "anthem_rest_api");
        assert!(!config.include_queryparams);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prefix_with_underscore() {
        let config = MetricsConfig {
            prometheus_prefix: "my_app_metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prefix_with_colon() {
        let config = MetricsConfig {
            prometheus_prefix: "app:metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_prefix_starting_with_underscore() {
        let config = MetricsConfig {
            prometheus_prefix: "_metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_allowed() {
        let config = MetricsConfig {
            prometheus_prefix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_prefix_starting_with_number() {
        let config = MetricsConfig {
            prometheus_prefix: "123metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_prefix_with_hyphen() {
        let config = MetricsConfig {
            prometheus_prefix: "my-metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_prefix_with_special_chars() {
        let config = MetricsConfig {
            prometheus_prefix: "my.metrics".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
