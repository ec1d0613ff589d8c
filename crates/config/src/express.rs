use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ExpressConfig {
    /// Host address to bind the HTTP server to
    ///
    /// Env: ANTHEM_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    #[serde(default = "default_bind_host")]
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: ANTHEM_EXPRESS_PORT
    /// Default: 4000
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_host.is_empty() {
            return Err(ConfigError::ValidateError(
                "Express bind host cannot be empty".to_string(),
            ));
        }

        if self.bind_host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::ValidateError(format!(
                "Express bind host '{}' is not a valid IP address",
                self.bind_host
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_express_config() {
        let config = ExpressConfig::default();
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.port, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ExpressConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_port_valid() {
        let config = ExpressConfig {
            port: 3000,
            ..Default::default()
        };
        assert!(config.validate().is_ok())
    }

    #[test]
    fn test_validate_bind_host_ipv6() {
        let config = ExpressConfig {
            bind_host: "::1".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bind_host_all_interfaces() {
        let config = ExpressConfig {
            bind_host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bind_host_invalid() {
        let config = ExpressConfig {
            bind_host: "not-an-ip".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bind_host_empty() {
        let config = ExpressConfig {
            bind_host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
