// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::{MsgDecodeError, TxMsg};
use crate::consts::{NetworkName, UnknownNetwork};
use crate::metrics::{MessageMetrics, MetricsRecorder};
use crate::state::AppState;
use crate::upstream::UpstreamError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetTransactionError {
    #[error(transparent)]
    UnknownNetwork(#[from] UnknownNetwork),

    #[error("Transactions are not supported for network {0}")]
    TransactionsUnsupported(NetworkName),

    #[error("Transaction {hash} not found")]
    NotFound { hash: String },

    #[error("Upstream request failed: {0}")]
    Upstream(#[source] UpstreamError),

    #[error("Could not decode transaction message at index {index}: {source}")]
    UndecodableMessage {
        index: usize,
        #[source]
        source: MsgDecodeError,
    },
}

impl IntoResponse for GetTransactionError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GetTransactionError::UnknownNetwork(_) | GetTransactionError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            GetTransactionError::TransactionsUnsupported(_) => StatusCode::BAD_REQUEST,
            GetTransactionError::Upstream(_) | GetTransactionError::UndecodableMessage { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// A normalized LCD transaction with every message decoded to its
/// tagged form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub network: NetworkName,
    pub chain_id: &'static str,
    pub hash: String,
    pub height: Option<String>,
    pub timestamp: Option<String>,
    pub gas_wanted: Option<String>,
    pub gas_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Value>,
    pub messages: Vec<TxMsg>,
}

#[utoipa::path(
    get,
    path = "/v1/{network}/transactions/{txHash}",
    tag = "transactions",
    summary = "Transaction by hash",
    description = "Fetches a transaction from the network's LCD API and decodes every \
                   carried message into its tagged form.",
    params(
        ("network" = String, Path, description = "Network name, e.g. cosmos"),
        ("txHash" = String, Path, description = "Transaction hash")
    ),
    responses(
        (status = 200, description = "Decoded transaction", body = Object),
        (status = 400, description = "Network does not serve transactions"),
        (status = 404, description = "Unknown network or transaction not found"),
        (status = 502, description = "Upstream failure or undecodable message")
    )
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path((network, tx_hash)): Path<(String, String)>,
) -> Result<Json<TransactionResponse>, GetTransactionError> {
    let network: NetworkName = network.parse()?;
    if network.definition().transactions_list_unsupported {
        return Err(GetTransactionError::TransactionsUnsupported(network));
    }

    let body = state
        .upstream
        .lcd_transaction(network, &tx_hash)
        .await
        .map_err(|err| {
            if err.is_not_found() {
                GetTransactionError::NotFound {
                    hash: tx_hash.clone(),
                }
            } else {
                GetTransactionError::Upstream(err)
            }
        })?;

    match transform_transaction(network, &tx_hash, &body) {
        Ok(response) => {
            for msg in &response.messages {
                MetricsRecorder.record_decoded_message(network.as_str(), msg.kind().as_str());
            }
            Ok(Json(response))
        }
        Err(err) => {
            if matches!(err, GetTransactionError::UndecodableMessage { .. }) {
                MetricsRecorder.record_unrecognized_message(network.as_str());
            }
            Err(err)
        }
    }
}

/// Normalize a raw LCD transaction body. Decodes each entry of
/// `tx.value.msg`; the first message no rule recognizes fails the whole
/// transaction, surfaced as a gateway error rather than a half-decoded
/// response.
fn transform_transaction(
    network: NetworkName,
    hash: &str,
    body: &Value,
) -> Result<TransactionResponse, GetTransactionError> {
    let definition = network.definition();

    let raw_msgs = body
        .pointer("/tx/value/msg")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut messages = Vec::with_capacity(raw_msgs.len());
    for (index, raw) in raw_msgs.iter().enumerate() {
        let msg = TxMsg::decode(raw)
            .map_err(|source| GetTransactionError::UndecodableMessage { index, source })?;
        messages.push(msg);
    }

    let hash = string_field(body, "txhash").unwrap_or_else(|| hash.to_string());
    let memo = body
        .pointer("/tx/value/memo")
        .and_then(Value::as_str)
        .filter(|memo| !memo.is_empty())
        .map(str::to_string);

    Ok(TransactionResponse {
        network,
        chain_id: definition.chain_id,
        hash,
        height: string_field(body, "height"),
        timestamp: string_field(body, "timestamp"),
        gas_wanted: string_field(body, "gas_wanted"),
        gas_used: string_field(body, "gas_used"),
        memo,
        fees: body.pointer("/tx/value/fee").cloned(),
        messages,
    })
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}
