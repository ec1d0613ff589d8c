use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Cosmos Hub LCD REST endpoint
    ///
    /// Env: ANTHEM_UPSTREAM_COSMOS_URL
    /// Default: https://lcd-cosmoshub.keplr.app
    #[serde(default = "default_cosmos_url")]
    pub cosmos_url: String,

    /// Terra LCD REST endpoint
    ///
    /// Env: ANTHEM_UPSTREAM_TERRA_URL
    /// Default: https://lcd.terra.dev
    #[serde(default = "default_terra_url")]
    pub terra_url: String,

    /// Kava LCD REST endpoint
    ///
    /// Env: ANTHEM_UPSTREAM_KAVA_URL
    /// Default: https://lcd.kava.io
    #[serde(default = "default_kava_url")]
    pub kava_url: String,

    /// Oasis indexer REST endpoint
    ///
    /// Env: ANTHEM_UPSTREAM_OASIS_URL
    /// Default: https://api.oasisscan.com
    #[serde(default = "default_oasis_url")]
    pub oasis_url: String,

    /// Celo block explorer REST endpoint
    ///
    /// Env: ANTHEM_UPSTREAM_CELO_URL
    /// Default: https://explorer.celo.org/api
    #[serde(default = "default_celo_url")]
    pub celo_url: String,

    /// Fiat price REST endpoint (CoinGecko-compatible)
    ///
    /// Env: ANTHEM_UPSTREAM_FIAT_URL
    /// Default: https://api.coingecko.com
    #[serde(default = "default_fiat_url")]
    pub fiat_url: String,

    /// Request timeout for upstream calls, in milliseconds
    ///
    /// Env: ANTHEM_UPSTREAM_TIMEOUT_MS
    /// Default: 10000
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_cosmos_url() -> String {
    "https://lcd-cosmoshub.keplr.app".to_string()
}

fn default_terra_url() -> String {
    "https://lcd.terra.dev".to_string()
}

fn default_kava_url() -> String {
    "https://lcd.kava.io".to_string()
}

fn default_oasis_url() -> String {
    "https://api.oasisscan.com".to_string()
}

fn default_celo_url() -> String {
    "https://explorer.celo.org/api".to_string()
}

fn default_fiat_url() -> String {
    "https://api.coingecko.com".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl UpstreamConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("cosmos", &self.cosmos_url),
            ("terra", &self.terra_url),
            ("kava", &self.kava_url),
            ("oasis", &self.oasis_url),
            ("celo", &self.celo_url),
            ("fiat", &self.fiat_url),
        ] {
            Self::validate_url(name, url)?;
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a single upstream URL
    fn validate_url(name: &str, url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(format!(
                "Upstream {} URL cannot be empty",
                name
            )));
        }

        let parsed = url::Url::parse(url_str).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid {} URL '{}': {}", name, url_str, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid {} URL scheme '{}'. Must be http:// or https://",
                name, scheme
            ))),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            cosmos_url: default_cosmos_url(),
            terra_url: default_terra_url(),
            kava_url: default_kava_url(),
            oasis_url: default_oasis_url(),
            celo_url: default_celo_url(),
            fiat_url: default_fiat_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
