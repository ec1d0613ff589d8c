// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shape-based classification of untagged Cosmos transaction messages.
//!
//! Legacy LCD payloads carry no usable discriminant, so the message
//! variant has to be inferred from which fields are present. The rules
//! form a strictly ordered decision list: signatures overlap (redelegate
//! is a superset of the two-key reward-withdrawal signature, which is in
//! turn a superset of the one-key commission signature), so the order
//! below is part of the contract and must not be rearranged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed set of Cosmos message variants Anthem understands.
///
/// `as_str` values are the public type names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsgKind {
    #[serde(rename = "MsgSend")]
    Send,
    #[serde(rename = "MsgBeginRedelegate")]
    BeginRedelegate,
    #[serde(rename = "MsgBeginRedelegateLegacy")]
    BeginRedelegateLegacy,
    #[serde(rename = "MsgDelegate")]
    Delegate,
    #[serde(rename = "MsgWithdrawDelegationReward")]
    WithdrawDelegationReward,
    #[serde(rename = "MsgModifyWithdrawAddress")]
    ModifyWithdrawAddress,
    #[serde(rename = "MsgWithdrawValidatorCommission")]
    WithdrawValidatorCommission,
    #[serde(rename = "MsgVote")]
    Vote,
    #[serde(rename = "MsgSubmitProposal")]
    SubmitProposal,
}

impl MsgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MsgKind::Send => "MsgSend",
            MsgKind::BeginRedelegate => "MsgBeginRedelegate",
            MsgKind::BeginRedelegateLegacy => "MsgBeginRedelegateLegacy",
            MsgKind::Delegate => "MsgDelegate",
            MsgKind::WithdrawDelegationReward => "MsgWithdrawDelegationReward",
            MsgKind::ModifyWithdrawAddress => "MsgModifyWithdrawAddress",
            MsgKind::WithdrawValidatorCommission => "MsgWithdrawValidatorCommission",
            MsgKind::Vote => "MsgVote",
            MsgKind::SubmitProposal => "MsgSubmitProposal",
        }
    }
}

impl std::fmt::Display for MsgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field signatures for rules 2 through 9, in evaluation order.
///
/// Supersets come before their subsets: the four-key redelegate
/// signatures are checked before the three-key delegate signature,
/// which is checked before the two-key reward-withdrawal signature,
/// which is checked before the one-key commission signature. A broader
/// signature evaluated early would shadow every narrower one after it.
/// Do not reorder.
const SIGNATURES: &[(MsgKind, &[&str])] = &[
    (
        MsgKind::BeginRedelegate,
        &[
            "amount",
            "delegator_address",
            "validator_src_address",
            "validator_dst_address",
        ],
    ),
    (
        MsgKind::BeginRedelegateLegacy,
        &[
            "shares_amount",
            "delegator_address",
            "validator_src_address",
            "validator_dst_address",
        ],
    ),
    (
        MsgKind::Delegate,
        &["amount", "delegator_address", "validator_address"],
    ),
    (
        MsgKind::WithdrawDelegationReward,
        &["delegator_address", "validator_address"],
    ),
    (
        MsgKind::ModifyWithdrawAddress,
        &["delegator_address", "withdraw_address"],
    ),
    (MsgKind::WithdrawValidatorCommission, &["validator_address"]),
    (MsgKind::Vote, &["proposal_id", "voter", "option"]),
    (
        MsgKind::SubmitProposal,
        &[
            "title",
            "description",
            "proposal_type",
            "proposer",
            "initial_deposit",
        ],
    ),
];

/// Classify an untagged message body by field shape.
///
/// A key counts as present when it exists on the object, whatever its
/// value (JSON has no way to say "defined but absent", so a `null`
/// value is still a present key). Extra keys never disqualify a match.
/// Returns `None` for non-object input or when no rule matches; never
/// panics.
pub fn classify_message(record: &Value) -> Option<MsgKind> {
    let obj = record.as_object()?;

    // Send is the one rule keyed on a value, not just a key: its
    // `amount` is a non-empty coin array. A single-coin `amount` object
    // falls through to the delegate family below.
    if let Some(amount) = obj.get("amount") {
        if amount.as_array().is_some_and(|coins| !coins.is_empty()) {
            return Some(MsgKind::Send);
        }
    }

    SIGNATURES
        .iter()
        .find(|(_, keys)| keys.iter().all(|key| obj.contains_key(*key)))
        .map(|(kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_requires_non_empty_amount_array() {
        let record = json!({ "amount": [{ "denom": "uatom", "amount": "10" }] });
        assert_eq!(classify_message(&record), Some(MsgKind::Send));

        // An empty array is not a send and matches nothing else either
        let record = json!({ "amount": [] });
        assert_eq!(classify_message(&record), None);
    }

    #[test]
    fn test_send_wins_over_redelegate_when_amount_is_array() {
        // The array check runs first, so a redelegate-shaped record
        // whose amount is a coin array still reads as a send
        let record = json!({
            "amount": [{ "denom": "uatom", "amount": "5" }],
            "delegator_address": "a",
            "validator_src_address": "b",
            "validator_dst_address": "c",
        });
        assert_eq!(classify_message(&record), Some(MsgKind::Send));
    }

    #[test]
    fn test_redelegate() {
        // On the wire a redelegate carries a single coin object
        let record = json!({
            "delegator_address": "a",
            "validator_src_address": "b",
            "validator_dst_address": "c",
            "amount": { "denom": "uatom", "amount": "5" },
        });
        assert_eq!(classify_message(&record), Some(MsgKind::BeginRedelegate));
    }

    #[test]
    fn test_redelegate_legacy() {
        let record = json!({
            "delegator_address": "a",
            "validator_src_address": "b",
            "validator_dst_address": "c",
            "shares_amount": "100.5",
        });
        assert_eq!(
            classify_message(&record),
            Some(MsgKind::BeginRedelegateLegacy)
        );
    }

    #[test]
    fn test_redelegate_variants_mutually_exclusive() {
        // amount selects the current form even when shares_amount is
        // also present, because its signature is evaluated first
        let record = json!({
            "delegator_address": "a",
            "validator_src_address": "b",
            "validator_dst_address": "c",
            "amount": { "denom": "uatom", "amount": "5" },
            "shares_amount": "100.5",
        });
        assert_eq!(classify_message(&record), Some(MsgKind::BeginRedelegate));
    }

    #[test]
    fn test_delegate() {
        let record = json!({
            "delegator_address": "a",
            "validator_address": "b",
            "amount": { "denom": "uatom", "amount": "5" },
        });
        assert_eq!(classify_message(&record), Some(MsgKind::Delegate));
    }

    #[test]
    fn test_withdraw_reward_not_shadowed_by_commission() {
        // Rule ordering: two keys mean a reward withdrawal, not a
        // commission withdrawal
        let record = json!({
            "delegator_address": "a",
            "validator_address": "b",
        });
        assert_eq!(
            classify_message(&record),
            Some(MsgKind::WithdrawDelegationReward)
        );
    }

    #[test]
    fn test_commission_withdrawal_on_validator_address_alone() {
        let record = json!({ "validator_address": "b" });
        assert_eq!(
            classify_message(&record),
            Some(MsgKind::WithdrawValidatorCommission)
        );
    }

    #[test]
    fn test_modify_withdraw_address() {
        let record = json!({
            "delegator_address": "a",
            "withdraw_address": "b",
        });
        assert_eq!(
            classify_message(&record),
            Some(MsgKind::ModifyWithdrawAddress)
        );
    }

    #[test]
    fn test_vote() {
        let record = json!({
            "proposal_id": "1",
            "voter": "a",
            "option": "Yes",
        });
        assert_eq!(classify_message(&record), Some(MsgKind::Vote));
    }

    #[test]
    fn test_submit_proposal() {
        let record = json!({
            "title": "t",
            "description": "d",
            "proposal_type": "Text",
            "proposer": "a",
            "initial_deposit": [{ "denom": "uatom", "amount": "512" }],
        });
        assert_eq!(classify_message(&record), Some(MsgKind::SubmitProposal));
    }

    #[test]
    fn test_unmatched_records() {
        assert_eq!(classify_message(&json!({ "foo": 1 })), None);
        assert_eq!(classify_message(&json!({ "unrelated": true })), None);
        assert_eq!(classify_message(&json!({})), None);
    }

    #[test]
    fn test_non_object_input() {
        assert_eq!(classify_message(&json!(null)), None);
        assert_eq!(classify_message(&json!("MsgSend")), None);
        assert_eq!(classify_message(&json!([1, 2, 3])), None);
        assert_eq!(classify_message(&json!(42)), None);
    }

    #[test]
    fn test_null_value_counts_as_present() {
        // Presence is about the key existing, not the value
        let record = json!({
            "delegator_address": null,
            "validator_address": null,
        });
        assert_eq!(
            classify_message(&record),
            Some(MsgKind::WithdrawDelegationReward)
        );
    }

    #[test]
    fn test_extra_keys_never_disqualify() {
        let record = json!({
            "proposal_id": "1",
            "voter": "a",
            "option": "Yes",
            "memo": "extra",
            "height": 12345,
        });
        assert_eq!(classify_message(&record), Some(MsgKind::Vote));
    }

    #[test]
    fn test_partial_signatures_do_not_match() {
        // Three of the five proposal keys is not a proposal
        let record = json!({
            "title": "t",
            "description": "d",
            "proposer": "a",
        });
        assert_eq!(classify_message(&record), None);

        // voter and option without proposal_id is not a vote
        let record = json!({ "voter": "a", "option": "Yes" });
        assert_eq!(classify_message(&record), None);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let record = json!({
            "delegator_address": "a",
            "validator_address": "b",
        });
        let first = classify_message(&record);
        let second = classify_message(&record);
        assert_eq!(first, second);
        assert_eq!(record["delegator_address"], "a");
    }

    #[test]
    fn test_signature_order_supersets_first() {
        // A signature listed after a subset of its own keys could never
        // win, so no earlier key set may be contained in a later one
        for (i, (earlier_kind, earlier_keys)) in SIGNATURES.iter().enumerate() {
            for (later_kind, later_keys) in &SIGNATURES[i + 1..] {
                let contained = earlier_keys.iter().all(|key| later_keys.contains(key));
                assert!(
                    !contained,
                    "{} shadows {} in the signature table",
                    earlier_kind, later_kind
                );
            }
        }
    }

    #[test]
    fn test_as_str_round_trips_through_serde() {
        for (kind, _) in SIGNATURES {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: MsgKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }
}
