// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::{NETWORKS, NetworkDefinition, NetworkName, available_networks};
use crate::extractors::JsonQuery;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworksQueryParams {
    /// Restrict the listing to networks officially shown in Anthem
    pub available: Option<bool>,
}

/// One entry of the network registry, serialized the way the dashboard
/// consumes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSummary {
    pub name: NetworkName,
    pub available: bool,
    pub denom: &'static str,
    pub ticker: &'static str,
    pub descriptor: &'static str,
    pub chain_id: &'static str,
    pub coin_gecko_ticker: &'static str,
    pub crypto_compare_ticker: &'static str,
    pub ledger_app_version: &'static str,
    pub ledger_app_name: &'static str,
    pub ledger_docs_link: &'static str,
    pub supports_ledger: bool,
    pub supports_fiat_prices: bool,
    pub balances_unsupported: bool,
    pub portfolio_unsupported: bool,
    pub transactions_list_unsupported: bool,
    pub denom_decimals: u32,
}

impl From<&'static NetworkDefinition> for NetworkSummary {
    fn from(net: &'static NetworkDefinition) -> Self {
        Self {
            name: net.name,
            available: net.available,
            denom: net.denom,
            ticker: net.ticker,
            descriptor: net.descriptor,
            chain_id: net.chain_id,
            coin_gecko_ticker: net.coin_gecko_ticker,
            crypto_compare_ticker: net.crypto_compare_ticker,
            ledger_app_version: net.ledger_app_version,
            ledger_app_name: net.ledger_app_name,
            ledger_docs_link: net.ledger_docs_link,
            supports_ledger: net.supports_ledger,
            supports_fiat_prices: net.supports_fiat_prices,
            balances_unsupported: net.balances_unsupported,
            portfolio_unsupported: net.portfolio_unsupported,
            transactions_list_unsupported: net.transactions_list_unsupported,
            denom_decimals: net.denom_decimals,
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/networks",
    tag = "networks",
    summary = "Supported networks",
    description = "Lists every network Anthem knows about, with its denom, tickers, \
                   ledger support, and per-feature availability flags.",
    params(
        ("available" = Option<bool>, Query, description = "Only list officially available networks")
    ),
    responses(
        (status = 200, description = "Network registry entries", body = Object),
        (status = 400, description = "Unknown query parameter")
    )
)]
pub async fn get_networks(
    JsonQuery(params): JsonQuery<NetworksQueryParams>,
) -> Json<Vec<NetworkSummary>> {
    let networks = if params.available.unwrap_or(false) {
        available_networks().map(NetworkSummary::from).collect()
    } else {
        NETWORKS.iter().map(NetworkSummary::from).collect()
    };

    Json(networks)
}
