// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed decoding of Cosmos transaction messages.
//!
//! The primary path reads the amino envelope's explicit type tag and
//! deserializes the body into a typed variant, so downstream code never
//! has to sniff fields. [`TxMsg::from_untyped`] keeps the shape-inference
//! path from [`classify`](super::classify) alive as a compatibility shim
//! for payloads that arrive without a usable tag.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::classify::{MsgKind, classify_message};

#[derive(Debug, Error)]
pub enum MsgDecodeError {
    #[error("Message shape matched no known variant")]
    UnrecognizedShape,

    #[error("Message envelope has no usable type tag")]
    MissingTag,

    #[error("Unknown message type tag '{tag}'")]
    UnknownTag { tag: String },

    #[error("Failed to decode {kind} message: {source}")]
    Malformed {
        kind: MsgKind,
        #[source]
        source: serde_json::Error,
    },
}

/// A single denomination amount, e.g. `{"denom": "uatom", "amount": "10"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Bank send. `amount` is a coin list; the addresses are not part of the
/// shape signature, so untagged payloads may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgSend {
    pub amount: Vec<Coin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgBeginRedelegate {
    pub amount: Coin,
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
}

/// Pre-Cosmos-SDK-0.35 redelegate form, denominated in shares rather
/// than tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgBeginRedelegateLegacy {
    pub shares_amount: String,
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgDelegate {
    pub amount: Coin,
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgWithdrawDelegationReward {
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgModifyWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgWithdrawValidatorCommission {
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgVote {
    pub proposal_id: String,
    pub voter: String,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgSubmitProposal {
    pub title: String,
    pub description: String,
    pub proposal_type: String,
    pub proposer: String,
    pub initial_deposit: Vec<Coin>,
}

/// A decoded transaction message: one variant per [`MsgKind`], carried
/// on the wire as `{"type": "<kind>", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TxMsg {
    #[serde(rename = "MsgSend")]
    Send(MsgSend),
    #[serde(rename = "MsgBeginRedelegate")]
    BeginRedelegate(MsgBeginRedelegate),
    #[serde(rename = "MsgBeginRedelegateLegacy")]
    BeginRedelegateLegacy(MsgBeginRedelegateLegacy),
    #[serde(rename = "MsgDelegate")]
    Delegate(MsgDelegate),
    #[serde(rename = "MsgWithdrawDelegationReward")]
    WithdrawDelegationReward(MsgWithdrawDelegationReward),
    #[serde(rename = "MsgModifyWithdrawAddress")]
    ModifyWithdrawAddress(MsgModifyWithdrawAddress),
    #[serde(rename = "MsgWithdrawValidatorCommission")]
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),
    #[serde(rename = "MsgVote")]
    Vote(MsgVote),
    #[serde(rename = "MsgSubmitProposal")]
    SubmitProposal(MsgSubmitProposal),
}

impl TxMsg {
    /// Decode a message, preferring the amino type tag and falling back
    /// to shape inference for untagged payloads.
    pub fn decode(msg: &Value) -> Result<Self, MsgDecodeError> {
        match Self::from_amino(msg) {
            Ok(decoded) => Ok(decoded),
            // A tag we don't know may still wrap a recognizable body
            Err(MsgDecodeError::UnknownTag { .. }) => {
                Self::from_untyped(msg.get("value").unwrap_or(msg))
            }
            Err(MsgDecodeError::MissingTag) => Self::from_untyped(msg),
            Err(err) => Err(err),
        }
    }

    /// Decode an amino-enveloped message, `{"type": tag, "value": body}`.
    ///
    /// Amino tags are namespaced (`cosmos-sdk/MsgSend`, Terra-style
    /// `bank/MsgSend`), so routing is on the segment after the last
    /// slash. The `MsgBeginRedelegate` tag covers both the current and
    /// the legacy wire form; they are told apart by which amount field
    /// the body carries.
    pub fn from_amino(value: &Value) -> Result<Self, MsgDecodeError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(MsgDecodeError::MissingTag)?;
        let body = value.get("value").unwrap_or(&Value::Null);

        let name = tag.rsplit('/').next().unwrap_or(tag);
        let kind = match name {
            "MsgSend" => MsgKind::Send,
            "MsgBeginRedelegate" => {
                if body.get("shares_amount").is_some() {
                    MsgKind::BeginRedelegateLegacy
                } else {
                    MsgKind::BeginRedelegate
                }
            }
            "MsgDelegate" => MsgKind::Delegate,
            "MsgWithdrawDelegationReward" => MsgKind::WithdrawDelegationReward,
            "MsgModifyWithdrawAddress" => MsgKind::ModifyWithdrawAddress,
            "MsgWithdrawValidatorCommission" => MsgKind::WithdrawValidatorCommission,
            "MsgVote" => MsgKind::Vote,
            "MsgSubmitProposal" => MsgKind::SubmitProposal,
            _ => {
                return Err(MsgDecodeError::UnknownTag {
                    tag: tag.to_string(),
                });
            }
        };

        Self::decode_as(kind, body)
    }

    /// Compatibility shim for payloads with no usable tag: infer the
    /// variant from field shape, then decode it.
    pub fn from_untyped(record: &Value) -> Result<Self, MsgDecodeError> {
        let kind = classify_message(record).ok_or(MsgDecodeError::UnrecognizedShape)?;
        Self::decode_as(kind, record)
    }

    pub fn kind(&self) -> MsgKind {
        match self {
            TxMsg::Send(_) => MsgKind::Send,
            TxMsg::BeginRedelegate(_) => MsgKind::BeginRedelegate,
            TxMsg::BeginRedelegateLegacy(_) => MsgKind::BeginRedelegateLegacy,
            TxMsg::Delegate(_) => MsgKind::Delegate,
            TxMsg::WithdrawDelegationReward(_) => MsgKind::WithdrawDelegationReward,
            TxMsg::ModifyWithdrawAddress(_) => MsgKind::ModifyWithdrawAddress,
            TxMsg::WithdrawValidatorCommission(_) => MsgKind::WithdrawValidatorCommission,
            TxMsg::Vote(_) => MsgKind::Vote,
            TxMsg::SubmitProposal(_) => MsgKind::SubmitProposal,
        }
    }

    fn decode_as(kind: MsgKind, body: &Value) -> Result<Self, MsgDecodeError> {
        let msg = match kind {
            MsgKind::Send => TxMsg::Send(decode_body(kind, body)?),
            MsgKind::BeginRedelegate => TxMsg::BeginRedelegate(decode_body(kind, body)?),
            MsgKind::BeginRedelegateLegacy => {
                TxMsg::BeginRedelegateLegacy(decode_body(kind, body)?)
            }
            MsgKind::Delegate => TxMsg::Delegate(decode_body(kind, body)?),
            MsgKind::WithdrawDelegationReward => {
                TxMsg::WithdrawDelegationReward(decode_body(kind, body)?)
            }
            MsgKind::ModifyWithdrawAddress => TxMsg::ModifyWithdrawAddress(decode_body(kind, body)?),
            MsgKind::WithdrawValidatorCommission => {
                TxMsg::WithdrawValidatorCommission(decode_body(kind, body)?)
            }
            MsgKind::Vote => TxMsg::Vote(decode_body(kind, body)?),
            MsgKind::SubmitProposal => TxMsg::SubmitProposal(decode_body(kind, body)?),
        };
        Ok(msg)
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(
    kind: MsgKind,
    body: &Value,
) -> Result<T, MsgDecodeError> {
    serde_json::from_value(body.clone())
        .map_err(|source| MsgDecodeError::Malformed { kind, source })
}
