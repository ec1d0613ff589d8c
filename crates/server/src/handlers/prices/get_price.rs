// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::{NetworkName, UnknownNetwork};
use crate::extractors::JsonQuery;
use crate::state::AppState;
use crate::upstream::UpstreamError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetPriceError {
    #[error(transparent)]
    UnknownNetwork(#[from] UnknownNetwork),

    #[error("Fiat prices are not supported for network {0}")]
    PricesUnsupported(NetworkName),

    #[error("Upstream request failed: {0}")]
    Upstream(#[source] UpstreamError),

    #[error("Price feed returned no {currency} quote for {ticker}")]
    MissingPrice { ticker: String, currency: String },
}

impl IntoResponse for GetPriceError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GetPriceError::UnknownNetwork(_) => StatusCode::NOT_FOUND,
            GetPriceError::PricesUnsupported(_) => StatusCode::BAD_REQUEST,
            GetPriceError::Upstream(_) | GetPriceError::MissingPrice { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PriceQueryParams {
    /// Quote currency, defaulting to usd.
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub network: NetworkName,
    pub ticker: &'static str,
    pub currency: String,
    pub price: f64,
}

#[utoipa::path(
    get,
    path = "/v1/{network}/price",
    tag = "prices",
    summary = "Fiat price",
    description = "Current fiat price for the network's native token, quoted in the \
                   requested currency.",
    params(
        ("network" = String, Path, description = "Network name, e.g. cosmos"),
        ("currency" = Option<String>, Query, description = "Quote currency, defaulting to usd")
    ),
    responses(
        (status = 200, description = "Current price quote", body = Object),
        (status = 400, description = "Network has no fiat price feed"),
        (status = 404, description = "Unknown network"),
        (status = 502, description = "Upstream failure or missing quote")
    )
)]
pub async fn get_price(
    State(state): State<AppState>,
    Path(network): Path<String>,
    JsonQuery(params): JsonQuery<PriceQueryParams>,
) -> Result<Json<PriceResponse>, GetPriceError> {
    let network: NetworkName = network.parse()?;
    let definition = network.definition();
    if !definition.supports_fiat_prices {
        return Err(GetPriceError::PricesUnsupported(network));
    }

    let currency = params
        .currency
        .map(|currency| currency.to_ascii_lowercase())
        .unwrap_or_else(|| "usd".to_string());

    let body = state
        .upstream
        .fiat_price(definition.coin_gecko_ticker, &currency)
        .await
        .map_err(GetPriceError::Upstream)?;

    let price = extract_price(&body, definition.coin_gecko_ticker, &currency).ok_or_else(|| {
        GetPriceError::MissingPrice {
            ticker: definition.coin_gecko_ticker.to_string(),
            currency: currency.clone(),
        }
    })?;

    Ok(Json(PriceResponse {
        network,
        ticker: definition.ticker,
        currency,
        price,
    }))
}

/// The price feed answers `{"<ticker>": {"<currency>": <number>}}`.
fn extract_price(body: &Value, ticker: &str, currency: &str) -> Option<f64> {
    body.get(ticker)?.get(currency)?.as_f64()
}
