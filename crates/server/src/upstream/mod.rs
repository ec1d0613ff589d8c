// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared HTTP client for every upstream Anthem proxies: the LCD REST
//! APIs of the Cosmos-family networks, the Oasis indexer, the Celo
//! block explorer, and the fiat price feed. Handlers decide how each
//! error maps to a response status; this layer only reports what
//! happened on the wire.

use config::UpstreamConfig;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::consts::NetworkName;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to decode upstream response from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not build upstream URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Network {0} has no upstream for this operation")]
    UnsupportedNetwork(NetworkName),
}

impl UpstreamError {
    /// Whether the upstream reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            UpstreamError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

/// One reqwest client reused across all upstreams, with per-network
/// base URLs from config and a shared timeout.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client, config })
    }

    /// Base URL of the LCD REST API for a Cosmos-family network.
    /// Oasis and Celo are not LCD networks.
    pub fn lcd_base(&self, network: NetworkName) -> Result<&str, UpstreamError> {
        match network {
            NetworkName::Cosmos => Ok(&self.config.cosmos_url),
            NetworkName::Terra => Ok(&self.config.terra_url),
            NetworkName::Kava => Ok(&self.config.kava_url),
            NetworkName::Oasis | NetworkName::Celo => {
                Err(UpstreamError::UnsupportedNetwork(network))
            }
        }
    }

    // ============================================================================================
    // Cosmos-family LCD endpoints
    // ============================================================================================

    pub async fn lcd_transaction(
        &self,
        network: NetworkName,
        hash: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(self.lcd_base(network)?, &["txs", hash])?;
        self.get_json(url).await
    }

    pub async fn lcd_balances(
        &self,
        network: NetworkName,
        address: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(self.lcd_base(network)?, &["bank", "balances", address])?;
        self.get_json(url).await
    }

    pub async fn lcd_delegations(
        &self,
        network: NetworkName,
        address: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(
            self.lcd_base(network)?,
            &["staking", "delegators", address, "delegations"],
        )?;
        self.get_json(url).await
    }

    pub async fn lcd_rewards(
        &self,
        network: NetworkName,
        address: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(
            self.lcd_base(network)?,
            &["distribution", "delegators", address, "rewards"],
        )?;
        self.get_json(url).await
    }

    pub async fn lcd_unbonding(
        &self,
        network: NetworkName,
        address: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(
            self.lcd_base(network)?,
            &["staking", "delegators", address, "unbonding_delegations"],
        )?;
        self.get_json(url).await
    }

    // ============================================================================================
    // Oasis indexer, Celo explorer, fiat prices
    // ============================================================================================

    pub async fn oasis_account_transactions(
        &self,
        address: &str,
    ) -> Result<Value, UpstreamError> {
        let url = join_url(
            &self.config.oasis_url,
            &["accounts", address, "transactions"],
        )?;
        self.get_json(url).await
    }

    pub async fn celo_account_balances(&self, address: &str) -> Result<Value, UpstreamError> {
        let url = join_url(&self.config.celo_url, &["accounts", address, "balances"])?;
        self.get_json(url).await
    }

    /// CoinGecko-style simple price lookup.
    pub async fn fiat_price(&self, ticker: &str, currency: &str) -> Result<Value, UpstreamError> {
        let mut url = join_url(&self.config.fiat_url, &["api", "v3", "simple", "price"])?;
        url.query_pairs_mut()
            .append_pair("ids", ticker)
            .append_pair("vs_currencies", currency);
        self.get_json(url).await
    }

    async fn get_json(&self, url: Url) -> Result<Value, UpstreamError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: url.to_string(),
            });
        }
        response.json::<Value>().await.map_err(|source| UpstreamError::Json {
            url: url.to_string(),
            source,
        })
    }
}

/// Unwrap the `{"height": ..., "result": ...}` envelope newer LCD
/// versions put around query responses. Older versions return the
/// payload bare; both forms pass through here.
pub fn lcd_result(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("result") {
            Some(result) => result,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Append percent-encoded path segments to a base URL. Config validation
/// guarantees the base parses; a path-segment failure means a caller
/// supplied something that cannot be a URL path (reported, not panicked).
fn join_url(base: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
    let invalid = || UpstreamError::InvalidUrl {
        url: format!("{}/{}", base, segments.join("/")),
    };

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    {
        let mut path = url.path_segments_mut().map_err(|_| invalid())?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}
