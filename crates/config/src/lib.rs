mod args;
mod error;
mod express;
mod log;
mod metrics;
mod upstream;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::MetricsConfig;
pub use upstream::UpstreamConfig;

/// Top-level service configuration, assembled from the environment.
///
/// Each section is loaded with its own env prefix (ANTHEM_EXPRESS_*,
/// ANTHEM_LOG_*, ANTHEM_METRICS_*, ANTHEM_UPSTREAM_*) so a single
/// section can be overridden without spelling out the others.
#[derive(Debug, Clone)]
pub struct AnthemConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub metrics: MetricsConfig,
    pub upstream: UpstreamConfig,
}

impl AnthemConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            express: envy::prefixed("ANTHEM_EXPRESS_").from_env::<ExpressConfig>()?,
            log: envy::prefixed("ANTHEM_LOG_").from_env::<LogConfig>()?,
            metrics: envy::prefixed("ANTHEM_METRICS_").from_env::<MetricsConfig>()?,
            upstream: envy::prefixed("ANTHEM_UPSTREAM_").from_env::<UpstreamConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}

impl Default for AnthemConfig {
    fn default() -> Self {
        Self {
            express: ExpressConfig::default(),
            log: LogConfig::default(),
            metrics: MetricsConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = AnthemConfig::default();
        assert_eq!(config.express.port, 4000);
        assert_eq!(config.log.level, "info");
        assert!(!config.metrics.enabled);
        assert_eq!(config.upstream.timeout_ms, 10_000);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        let config = AnthemConfig::from_env().expect("empty env should load defaults");
        assert_eq!(config.express.port, 4000);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.upstream.cosmos_url, "https://lcd-cosmoshub.keplr.app");
    }

    #[test]
    #[serial]
    fn test_from_env_section_override() {
        unsafe {
            std::env::set_var("ANTHEM_EXPRESS_PORT", "8081");
            std::env::set_var("ANTHEM_LOG_LEVEL", "debug");
        }

        let config = AnthemConfig::from_env().expect("env should load");
        assert_eq!(config.express.port, 8081);
        assert_eq!(config.log.level, "debug");
        // Untouched sections keep their defaults
        assert_eq!(config.upstream.timeout_ms, 10_000);

        unsafe {
            std::env::remove_var("ANTHEM_EXPRESS_PORT");
            std::env::remove_var("ANTHEM_LOG_LEVEL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_value() {
        unsafe {
            std::env::set_var("ANTHEM_LOG_LEVEL", "shouting");
        }

        let result = AnthemConfig::from_env();
        assert!(result.is_err());

        unsafe {
            std::env::remove_var("ANTHEM_LOG_LEVEL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_upstream_url() {
        unsafe {
            std::env::set_var("ANTHEM_UPSTREAM_OASIS_URL", "ftp://example.com");
        }

        let result = AnthemConfig::from_env();
        assert!(result.is_err());

        unsafe {
            std::env::remove_var("ANTHEM_UPSTREAM_OASIS_URL");
        }
    }
}
