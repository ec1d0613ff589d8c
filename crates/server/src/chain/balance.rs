// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Account balance shapes.
//!
//! Celo accounts carry locked-gold accounting that no other network
//! has, so balances come in two shapes told apart by a single probe
//! field. The probe drives which typed struct an upstream record is
//! decoded into.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::msg::Coin;

/// The field only extended (Celo) balance records carry.
const EXTENDED_PROBE_FIELD: &str = "totalLockedGoldBalance";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceShape {
    Extended,
    Standard,
}

/// Probe an untyped balances record for its shape.
///
/// `Extended` requires the probe field to be present with a non-null
/// value; a record that merely mentions the key with `null` is still a
/// standard record. Non-object input is `Standard` (the probe cannot
/// hold on it).
pub fn classify_balance_shape(balances: &Value) -> BalanceShape {
    match balances.get(EXTENDED_PROBE_FIELD) {
        Some(value) if !value.is_null() => BalanceShape::Extended,
        _ => BalanceShape::Standard,
    }
}

/// Standard balances, shared by every Cosmos-family network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountBalances {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Vec<Coin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<Coin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegations: Option<Vec<Coin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbonding: Option<Vec<Coin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commissions: Option<Vec<Coin>>,
}

/// Extended balances for Celo, with its locked-gold accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeloAccountBalances {
    pub total_locked_gold_balance: String,
    pub available_gold_balance: String,
    pub non_voting_locked_gold_balance: String,
    pub voting_locked_gold_balance: String,
    pub pending_withdrawal_balance: String,
    #[serde(rename = "celoUSDValue")]
    pub celo_usd_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegations: Option<Vec<Coin>>,
}

/// Balances payload in either shape. Serializes transparently as the
/// inner record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AccountBalancesResponse {
    Extended(CeloAccountBalances),
    Standard(AccountBalances),
}

impl AccountBalancesResponse {
    /// Decode an upstream balances record, probing the shape first so
    /// the probe (not serde guesswork) picks the variant.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        match classify_balance_shape(value) {
            BalanceShape::Extended => serde_json::from_value(value.clone()).map(Self::Extended),
            BalanceShape::Standard => serde_json::from_value(value.clone()).map(Self::Standard),
        }
    }

    pub fn shape(&self) -> BalanceShape {
        match self {
            AccountBalancesResponse::Extended(_) => BalanceShape::Extended,
            AccountBalancesResponse::Standard(_) => BalanceShape::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probe_selects_extended() {
        let record = json!({ "totalLockedGoldBalance": "1000" });
        assert_eq!(classify_balance_shape(&record), BalanceShape::Extended);
    }

    #[test]
    fn test_probe_selects_standard_when_field_absent() {
        let record = json!({ "balance": [{ "denom": "uatom", "amount": "1" }] });
        assert_eq!(classify_balance_shape(&record), BalanceShape::Standard);
        assert_eq!(classify_balance_shape(&json!({})), BalanceShape::Standard);
    }

    #[test]
    fn test_probe_null_value_is_standard() {
        let record = json!({ "totalLockedGoldBalance": null });
        assert_eq!(classify_balance_shape(&record), BalanceShape::Standard);
    }

    #[test]
    fn test_probe_non_object_is_standard() {
        assert_eq!(classify_balance_shape(&json!(null)), BalanceShape::Standard);
        assert_eq!(classify_balance_shape(&json!([1])), BalanceShape::Standard);
    }

    #[test]
    fn test_probe_is_idempotent() {
        let record = json!({ "totalLockedGoldBalance": "0" });
        assert_eq!(
            classify_balance_shape(&record),
            classify_balance_shape(&record)
        );
    }

    #[test]
    fn test_from_value_extended() {
        let record = json!({
            "totalLockedGoldBalance": "1000",
            "availableGoldBalance": "250",
            "nonVotingLockedGoldBalance": "400",
            "votingLockedGoldBalance": "600",
            "pendingWithdrawalBalance": "0",
            "celoUSDValue": "1730.50",
        });
        let decoded = AccountBalancesResponse::from_value(&record).unwrap();
        assert_eq!(decoded.shape(), BalanceShape::Extended);
        match decoded {
            AccountBalancesResponse::Extended(celo) => {
                assert_eq!(celo.total_locked_gold_balance, "1000");
                assert_eq!(celo.celo_usd_value, "1730.50");
            }
            other => panic!("expected extended, got {:?}", other),
        }
    }

    #[test]
    fn test_from_value_standard() {
        let record = json!({
            "balance": [{ "denom": "uatom", "amount": "2500000" }],
            "rewards": [{ "denom": "uatom", "amount": "100" }],
        });
        let decoded = AccountBalancesResponse::from_value(&record).unwrap();
        assert_eq!(decoded.shape(), BalanceShape::Standard);
        match decoded {
            AccountBalancesResponse::Standard(balances) => {
                assert_eq!(balances.balance.unwrap()[0].amount, "2500000");
                assert!(balances.unbonding.is_none());
            }
            other => panic!("expected standard, got {:?}", other),
        }
    }

    #[test]
    fn test_extended_wire_field_names() {
        let celo = CeloAccountBalances {
            total_locked_gold_balance: "1".to_string(),
            available_gold_balance: "2".to_string(),
            non_voting_locked_gold_balance: "3".to_string(),
            voting_locked_gold_balance: "4".to_string(),
            pending_withdrawal_balance: "5".to_string(),
            celo_usd_value: "6".to_string(),
            delegations: None,
        };
        let wire = serde_json::to_value(&celo).unwrap();
        assert!(wire.get("totalLockedGoldBalance").is_some());
        assert!(wire.get("celoUSDValue").is_some());
        // Response serializes transparently, without an enum wrapper
        let wrapped = serde_json::to_value(AccountBalancesResponse::Extended(celo)).unwrap();
        assert_eq!(wire, wrapped);
    }
}
