// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::{OasisEventKind, OasisTransactionEvent};
use crate::consts::NetworkName;
use crate::metrics::{MessageMetrics, MetricsRecorder};
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
pub enum GetOasisTransactionsError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] UpstreamError),

    #[error("Could not decode Oasis transaction list: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IntoResponse for GetOasisTransactionsError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

/// One indexer record; `data` holds the event payload, classified after
/// the envelope is decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOasisTransaction {
    #[serde(alias = "txHash")]
    hash: String,
    height: Option<u64>,
    date: Option<String>,
    fee: Option<String>,
    gas: Option<u64>,
    gas_price: Option<String>,
    sender: Option<String>,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OasisTransaction {
    pub hash: String,
    pub height: Option<u64>,
    pub date: Option<String>,
    pub fee: Option<String>,
    pub gas: Option<u64>,
    pub gas_price: Option<String>,
    pub sender: Option<String>,
    pub event: OasisTransactionEvent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OasisTransactionsResponse {
    pub address: String,
    pub transactions: Vec<OasisTransaction>,
}

#[utoipa::path(
    get,
    path = "/v1/oasis/accounts/{address}/transactions",
    tag = "accounts",
    summary = "Oasis account transactions",
    description = "Lists an account's transactions from the Oasis indexer with each \
                   carried event classified into its stable tagged form.",
    params(
        ("address" = String, Path, description = "Oasis account address")
    ),
    responses(
        (status = 200, description = "Transactions with classified events", body = Object),
        (status = 502, description = "Upstream failure or undecodable transaction list")
    )
)]
pub async fn get_oasis_transactions(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<OasisTransactionsResponse>, GetOasisTransactionsError> {
    let body = state
        .upstream
        .oasis_account_transactions(&address)
        .await
        .map_err(GetOasisTransactionsError::Upstream)?;

    let records = extract_records(body).map_err(GetOasisTransactionsError::Decode)?;

    let network = NetworkName::Oasis.as_str();
    let transactions = records
        .into_iter()
        .map(|record| {
            let event = decode_event(&record.data);
            MetricsRecorder.record_decoded_message(network, event.kind.type_name());
            if event.kind == OasisEventKind::Unknown {
                MetricsRecorder.record_unrecognized_message(network);
            }

            OasisTransaction {
                hash: record.hash,
                height: record.height,
                date: record.date,
                fee: record.fee,
                gas: record.gas,
                gas_price: record.gas_price,
                sender: record.sender,
                event,
            }
        })
        .collect();

    Ok(Json(OasisTransactionsResponse {
        address,
        transactions,
    }))
}

/// The indexer wraps its list in `{"data": [...]}`; older deployments
/// return the bare array.
fn extract_records(body: Value) -> Result<Vec<RawOasisTransaction>, serde_json::Error> {
    let list = match body {
        Value::Object(mut map) => map.remove("data").unwrap_or_else(|| Value::Array(Vec::new())),
        other => other,
    };
    serde_json::from_value(list)
}

/// Classify one event payload. Total: a payload the typed decode
/// rejects (no `kind`, non-object, ...) still comes back as an
/// `Unknown` event carrying the payload untouched.
fn decode_event(data: &Value) -> OasisTransactionEvent {
    serde_json::from_value(data.clone()).unwrap_or_else(|_| OasisTransactionEvent {
        kind: OasisEventKind::Unknown,
        data: data.clone(),
    })
}
