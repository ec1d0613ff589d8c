// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::chain::{AccountBalances, AccountBalancesResponse, Coin};
use crate::consts::{NetworkDefinition, NetworkName, UnknownNetwork, denom_to_unit};
use crate::extractors::JsonQuery;
use crate::state::AppState;
use crate::upstream::{UpstreamError, lcd_result};
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
pub enum GetBalancesError {
    #[error(transparent)]
    UnknownNetwork(#[from] UnknownNetwork),

    #[error("No balances source for network {0}")]
    NoBalancesSource(NetworkName),

    #[error("Upstream request failed: {0}")]
    Upstream(#[source] UpstreamError),

    #[error("Could not decode balances record: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IntoResponse for GetBalancesError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GetBalancesError::UnknownNetwork(_) => StatusCode::NOT_FOUND,
            GetBalancesError::NoBalancesSource(_) => StatusCode::BAD_REQUEST,
            GetBalancesError::Upstream(_) | GetBalancesError::Decode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BalancesQueryParams {
    /// Convert atomic amounts to display units.
    #[serde(default)]
    pub denominated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    pub network: NetworkName,
    pub address: String,
    pub balances: AccountBalancesResponse,
}

#[utoipa::path(
    get,
    path = "/v1/{network}/accounts/{address}/balances",
    tag = "accounts",
    summary = "Account balances",
    description = "Balances for an account. Cosmos-family networks fan out over the LCD \
                   bank, delegation, reward and unbonding queries; Celo proxies a single \
                   record whose shape is probed before decoding.",
    params(
        ("network" = String, Path, description = "Network name, e.g. cosmos"),
        ("address" = String, Path, description = "Account address"),
        ("denominated" = Option<bool>, Query, description = "Convert atomic amounts to display units")
    ),
    responses(
        (status = 200, description = "Account balances", body = Object),
        (status = 400, description = "No balances source for the network"),
        (status = 404, description = "Unknown network"),
        (status = 502, description = "Upstream failure or undecodable record")
    )
)]
pub async fn get_balances(
    State(state): State<AppState>,
    Path((network, address)): Path<(String, String)>,
    JsonQuery(params): JsonQuery<BalancesQueryParams>,
) -> Result<Json<BalancesResponse>, GetBalancesError> {
    let network: NetworkName = network.parse()?;
    let definition = network.definition();

    let balances = match network {
        NetworkName::Cosmos | NetworkName::Terra | NetworkName::Kava => {
            let (balance, delegations, rewards, unbonding) = tokio::join!(
                state.upstream.lcd_balances(network, &address),
                state.upstream.lcd_delegations(network, &address),
                state.upstream.lcd_rewards(network, &address),
                state.upstream.lcd_unbonding(network, &address),
            );

            let standard = transform_lcd_balances(
                definition,
                balance.map_err(GetBalancesError::Upstream)?,
                delegations.map_err(GetBalancesError::Upstream)?,
                rewards.map_err(GetBalancesError::Upstream)?,
                unbonding.map_err(GetBalancesError::Upstream)?,
            )
            .map_err(GetBalancesError::Decode)?;

            AccountBalancesResponse::Standard(standard)
        }
        NetworkName::Celo => {
            let record = state
                .upstream
                .celo_account_balances(&address)
                .await
                .map_err(GetBalancesError::Upstream)?;
            AccountBalancesResponse::from_value(&record).map_err(GetBalancesError::Decode)?
        }
        // Dispatch goes by upstream source, not by the registry's
        // balances_unsupported flag (that flag is /networks metadata).
        // Oasis is the one network with no balances source here.
        NetworkName::Oasis => return Err(GetBalancesError::NoBalancesSource(network)),
    };

    let balances = if params.denominated {
        denominate(balances, definition.denom_decimals)
    } else {
        balances
    };

    Ok(Json(BalancesResponse {
        network,
        address,
        balances,
    }))
}

/// Assemble standard balances from the four LCD query results. Each
/// body passes through [`lcd_result`] first, so v0.37-style envelopes
/// and bare pre-envelope payloads both work.
fn transform_lcd_balances(
    definition: &NetworkDefinition,
    balance: Value,
    delegations: Value,
    rewards: Value,
    unbonding: Value,
) -> Result<AccountBalances, serde_json::Error> {
    Ok(AccountBalances {
        balance: coin_list(lcd_result(balance))?,
        delegations: delegation_coins(definition.denom, lcd_result(delegations)),
        rewards: reward_coins(lcd_result(rewards))?,
        unbonding: unbonding_coins(definition.denom, lcd_result(unbonding)),
        commissions: None,
    })
}

fn coin_list(value: Value) -> Result<Option<Vec<Coin>>, serde_json::Error> {
    match value {
        Value::Null => Ok(None),
        other => {
            let coins: Vec<Coin> = serde_json::from_value(other)?;
            Ok((!coins.is_empty()).then_some(coins))
        }
    }
}

/// Delegation records report staked value as `balance` (a coin object
/// on newer nodes, a bare amount string on older ones) with `shares`
/// as the fallback.
fn delegation_coins(denom: &str, value: Value) -> Option<Vec<Coin>> {
    let records = value.as_array()?;

    let coins: Vec<Coin> = records
        .iter()
        .filter_map(|record| {
            let amount = match record.get("balance") {
                Some(Value::String(amount)) => Some(amount.clone()),
                Some(Value::Object(balance)) => balance
                    .get("amount")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => record
                    .get("shares")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }?;

            Some(Coin {
                denom: denom.to_string(),
                amount,
            })
        })
        .collect();

    (!coins.is_empty()).then_some(coins)
}

/// Rewards arrive either as a bare coin list or, on newer nodes, as
/// `{rewards: [per-validator...], total: [coins]}`.
fn reward_coins(value: Value) -> Result<Option<Vec<Coin>>, serde_json::Error> {
    let coins = match value {
        Value::Null => return Ok(None),
        Value::Object(mut map) => match map.remove("total") {
            Some(Value::Null) | None => return Ok(None),
            Some(total) => total,
        },
        other => other,
    };

    let coins: Vec<Coin> = serde_json::from_value(coins)?;
    Ok((!coins.is_empty()).then_some(coins))
}

/// Unbonding delegations nest per-validator `entries`; each entry's
/// remaining `balance` becomes one coin in the network denom.
fn unbonding_coins(denom: &str, value: Value) -> Option<Vec<Coin>> {
    let records = value.as_array()?;

    let coins: Vec<Coin> = records
        .iter()
        .flat_map(|record| {
            record
                .get("entries")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
        })
        .filter_map(|entry| {
            let amount = entry.get("balance").and_then(Value::as_str)?;
            Some(Coin {
                denom: denom.to_string(),
                amount: amount.to_string(),
            })
        })
        .collect();

    (!coins.is_empty()).then_some(coins)
}

/// Convert every atomic amount in the response to display units.
/// Lenient: an amount `denom_to_unit` rejects is left as-is rather
/// than failing the whole response.
fn denominate(balances: AccountBalancesResponse, decimals: u32) -> AccountBalancesResponse {
    match balances {
        AccountBalancesResponse::Standard(mut standard) => {
            for coins in [
                &mut standard.balance,
                &mut standard.rewards,
                &mut standard.delegations,
                &mut standard.unbonding,
                &mut standard.commissions,
            ]
            .into_iter()
            .flatten()
            {
                denominate_coins(coins, decimals);
            }
            AccountBalancesResponse::Standard(standard)
        }
        AccountBalancesResponse::Extended(mut celo) => {
            // celoUSDValue is already a fiat figure; the gold balances
            // are the atomic amounts.
            for field in [
                &mut celo.total_locked_gold_balance,
                &mut celo.available_gold_balance,
                &mut celo.non_voting_locked_gold_balance,
                &mut celo.voting_locked_gold_balance,
                &mut celo.pending_withdrawal_balance,
            ] {
                if let Some(converted) = denom_to_unit(field, decimals) {
                    *field = converted;
                }
            }
            if let Some(coins) = &mut celo.delegations {
                denominate_coins(coins, decimals);
            }
            AccountBalancesResponse::Extended(celo)
        }
    }
}

fn denominate_coins(coins: &mut [Coin], decimals: u32) {
    for coin in coins {
        if let Some(converted) = denom_to_unit(&coin.amount, decimals) {
            coin.amount = converted;
        }
    }
}
