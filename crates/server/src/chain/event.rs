// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of Oasis ledger events.
//!
//! Unlike Cosmos messages, Oasis events arrive with an explicit `kind`
//! discriminant, so no shape inference is involved. The closed set is
//! enforced at the decode boundary: any kind string we have never seen
//! becomes [`OasisEventKind::Unknown`], and everything downstream works
//! on the enum, where match exhaustiveness is checked by the compiler.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Event kinds emitted by the Oasis staking ledger, plus the `Unknown`
/// sentinel for kinds the indexer has not catalogued yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OasisEventKind {
    Burn,
    Transfer,
    EscrowAdd,
    EscrowTake,
    EscrowReclaim,
    RegisterEntity,
    UnfreezeNode,
    RegisterNode,
    RegisterRuntime,
    #[serde(rename = "RateEvent")]
    Rate,
    #[serde(rename = "BoundEvent")]
    Bound,
    AmendCommissionSchedule,
    #[serde(other)]
    Unknown,
}

impl OasisEventKind {
    /// Every catalogued kind, for table-driven tests and docs.
    pub const ALL: &'static [OasisEventKind] = &[
        OasisEventKind::Burn,
        OasisEventKind::Transfer,
        OasisEventKind::EscrowAdd,
        OasisEventKind::EscrowTake,
        OasisEventKind::EscrowReclaim,
        OasisEventKind::RegisterEntity,
        OasisEventKind::UnfreezeNode,
        OasisEventKind::RegisterNode,
        OasisEventKind::RegisterRuntime,
        OasisEventKind::Rate,
        OasisEventKind::Bound,
        OasisEventKind::AmendCommissionSchedule,
        OasisEventKind::Unknown,
    ];

    /// The stable public type name for this kind.
    ///
    /// Exhaustive on purpose: adding a kind without a name is a compile
    /// error, not a runtime fallthrough.
    pub fn type_name(&self) -> &'static str {
        match self {
            OasisEventKind::Burn => "OasisBurnEvent",
            OasisEventKind::Transfer => "OasisTransferEvent",
            OasisEventKind::EscrowAdd => "OasisEscrowAddEvent",
            OasisEventKind::EscrowTake => "OasisEscrowTakeEvent",
            OasisEventKind::EscrowReclaim => "OasisEscrowReclaimEvent",
            OasisEventKind::RegisterEntity => "OasisRegisterEntityEvent",
            OasisEventKind::UnfreezeNode => "OasisUnfreezeNodeEvent",
            OasisEventKind::RegisterNode => "OasisRegisterNodeEvent",
            OasisEventKind::RegisterRuntime => "OasisRegisterRuntimeEvent",
            OasisEventKind::Rate => "OasisRateEvent",
            OasisEventKind::Bound => "OasisBoundEvent",
            OasisEventKind::AmendCommissionSchedule => "OasisAmendCommissionScheduleEvent",
            OasisEventKind::Unknown => "OasisUnknownEvent",
        }
    }
}

/// An Oasis ledger event: typed discriminant plus the untouched payload.
///
/// Serializes as `{"type": "<type_name>", "data": {...}}`; the payload
/// fields are surfaced to the dashboard as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct OasisTransactionEvent {
    pub kind: OasisEventKind,
    #[serde(flatten)]
    pub data: Value,
}

impl Serialize for OasisTransactionEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OasisTransactionEvent", 2)?;
        state.serialize_field("type", self.kind.type_name())?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_type_name_total_and_distinct() {
        let names: HashSet<_> = OasisEventKind::ALL
            .iter()
            .map(|kind| kind.type_name())
            .collect();
        assert_eq!(names.len(), OasisEventKind::ALL.len());
        for name in names {
            assert!(name.starts_with("Oasis"));
            assert!(name.ends_with("Event"));
        }
    }

    #[test]
    fn test_type_name_stable_across_calls() {
        for kind in OasisEventKind::ALL {
            assert_eq!(kind.type_name(), kind.type_name());
        }
    }

    #[test]
    fn test_known_kind_mappings() {
        assert_eq!(OasisEventKind::Burn.type_name(), "OasisBurnEvent");
        assert_eq!(OasisEventKind::Transfer.type_name(), "OasisTransferEvent");
        assert_eq!(OasisEventKind::EscrowAdd.type_name(), "OasisEscrowAddEvent");
        assert_eq!(OasisEventKind::Rate.type_name(), "OasisRateEvent");
        assert_eq!(
            OasisEventKind::AmendCommissionSchedule.type_name(),
            "OasisAmendCommissionScheduleEvent"
        );
        assert_eq!(OasisEventKind::Unknown.type_name(), "OasisUnknownEvent");
    }

    #[test]
    fn test_deserialize_known_kinds() {
        let kind: OasisEventKind = serde_json::from_value(json!("Transfer")).unwrap();
        assert_eq!(kind, OasisEventKind::Transfer);

        let kind: OasisEventKind = serde_json::from_value(json!("RateEvent")).unwrap();
        assert_eq!(kind, OasisEventKind::Rate);

        let kind: OasisEventKind = serde_json::from_value(json!("BoundEvent")).unwrap();
        assert_eq!(kind, OasisEventKind::Bound);
    }

    #[test]
    fn test_unrecognized_kind_becomes_unknown() {
        let kind: OasisEventKind = serde_json::from_value(json!("SomeFutureEvent")).unwrap();
        assert_eq!(kind, OasisEventKind::Unknown);

        let kind: OasisEventKind = serde_json::from_value(json!("UnknownEvent")).unwrap();
        assert_eq!(kind, OasisEventKind::Unknown);
    }

    #[test]
    fn test_event_decode_and_tagging() {
        let event: OasisTransactionEvent = serde_json::from_value(json!({
            "kind": "Transfer",
            "from": "oasis1abc",
            "to": "oasis1def",
            "tokens": "250",
        }))
        .unwrap();

        assert_eq!(event.kind, OasisEventKind::Transfer);
        assert_eq!(event.data["from"], "oasis1abc");

        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["type"], "OasisTransferEvent");
        assert_eq!(wire["data"]["tokens"], "250");
        // The discriminant is not duplicated into the payload
        assert!(wire["data"].get("kind").is_none());
    }

    #[test]
    fn test_event_decode_unknown_kind() {
        let event: OasisTransactionEvent = serde_json::from_value(json!({
            "kind": "NewfangledThing",
            "payload": 1,
        }))
        .unwrap();

        assert_eq!(event.kind, OasisEventKind::Unknown);
        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["type"], "OasisUnknownEvent");
    }
}
