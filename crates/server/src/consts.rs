// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Networks known to Anthem, parsed case-insensitively from path segments
/// and serialized upper-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkName {
    Cosmos,
    Terra,
    Kava,
    Oasis,
    Celo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown network '{0}'")]
pub struct UnknownNetwork(pub String);

impl NetworkName {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Cosmos => "COSMOS",
            NetworkName::Terra => "TERRA",
            NetworkName::Kava => "KAVA",
            NetworkName::Oasis => "OASIS",
            NetworkName::Celo => "CELO",
        }
    }

    /// Definition lookup. NETWORKS is ordered by discriminant; the table
    /// test keeps them aligned.
    pub fn definition(self) -> &'static NetworkDefinition {
        &NETWORKS[self as usize]
    }
}

impl std::fmt::Display for NetworkName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkName {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cosmos" => Ok(NetworkName::Cosmos),
            "terra" => Ok(NetworkName::Terra),
            "kava" => Ok(NetworkName::Kava),
            "oasis" => Ok(NetworkName::Oasis),
            "celo" => Ok(NetworkName::Celo),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Static definition of a network supported by Anthem.
///
/// The `available` flag officially shows or hides the network; the
/// `*_unsupported` flags dictate which features each network exposes.
#[derive(Debug, Clone)]
pub struct NetworkDefinition {
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
    /// Decimal places between the base denom and one display unit
    pub denom_decimals: u32,
}

/// Source of truth for all supported or in-development networks.
pub const NETWORKS: &[NetworkDefinition] = &[
    NetworkDefinition {
        name: NetworkName::Cosmos,
        available: true,
        denom: "uatom",
        ticker: "atom",
        descriptor: "ATOM",
        chain_id: "cosmoshub-3",
        coin_gecko_ticker: "cosmos",
        crypto_compare_ticker: "ATOM",
        ledger_app_version: "1.1.1",
        ledger_app_name: "Cosmos",
        ledger_docs_link: "https://hub.cosmos.network/master/resources/ledger.html#install-the-cosmos-ledger-application",
        supports_ledger: true,
        supports_fiat_prices: true,
        balances_unsupported: false,
        portfolio_unsupported: false,
        transactions_list_unsupported: false,
        denom_decimals: 6,
    },
    NetworkDefinition {
        name: NetworkName::Terra,
        available: true,
        denom: "uluna",
        ticker: "luna",
        descriptor: "LUNA",
        chain_id: "columbus-3",
        coin_gecko_ticker: "terra-luna",
        crypto_compare_ticker: "LUNA",
        ledger_app_version: "1.1.1",
        ledger_app_name: "Cosmos",
        ledger_docs_link: "https://docs.terra.money/docs/node-ledger-nano-support",
        supports_ledger: true,
        supports_fiat_prices: true,
        balances_unsupported: true,
        portfolio_unsupported: true,
        transactions_list_unsupported: false,
        denom_decimals: 6,
    },
    NetworkDefinition {
        name: NetworkName::Kava,
        available: true,
        denom: "ukava",
        ticker: "kava",
        descriptor: "KAVA",
        chain_id: "kava-2",
        coin_gecko_ticker: "kava",
        crypto_compare_ticker: "KAVA",
        ledger_app_version: "1.1.1",
        ledger_app_name: "Cosmos",
        ledger_docs_link: "https://medium.com/kava-labs/configure-ledger-nano-s-for-use-with-kava-4c3b00aeca32",
        supports_ledger: true,
        supports_fiat_prices: true,
        balances_unsupported: true,
        portfolio_unsupported: true,
        transactions_list_unsupported: false,
        denom_decimals: 6,
    },
    NetworkDefinition {
        name: NetworkName::Oasis,
        available: false,
        denom: "oasis",
        ticker: "oasis",
        descriptor: "OASIS",
        chain_id: "oasis",
        coin_gecko_ticker: "oasis",
        crypto_compare_ticker: "OASIS",
        ledger_app_version: "n/a",
        ledger_app_name: "n/a",
        ledger_docs_link: "n/a",
        supports_ledger: false,
        supports_fiat_prices: false,
        balances_unsupported: false,
        portfolio_unsupported: true,
        transactions_list_unsupported: true,
        denom_decimals: 9,
    },
    NetworkDefinition {
        name: NetworkName::Celo,
        available: false,
        denom: "cGLD",
        ticker: "celo",
        descriptor: "CELO",
        chain_id: "celo",
        coin_gecko_ticker: "celo",
        crypto_compare_ticker: "CELO",
        ledger_app_version: "1.0.1",
        ledger_app_name: "Celo",
        ledger_docs_link: "https://docs.celo.org/celo-gold-holder-guide/ledger",
        supports_ledger: false,
        supports_fiat_prices: false,
        balances_unsupported: true,
        portfolio_unsupported: true,
        transactions_list_unsupported: true,
        denom_decimals: 18,
    },
];

/// Networks officially shown in Anthem.
pub fn available_networks() -> impl Iterator<Item = &'static NetworkDefinition> {
    NETWORKS.iter().filter(|net| net.available)
}

// ================================================================================================
// Denomination conversion
// ================================================================================================

/// Convert an atomic-denom amount string into display units by shifting the
/// decimal point left by `decimals` places.
///
/// Amounts arrive as decimal strings and can exceed what f64 represents
/// exactly, so the shift is done on the digits. Accepts an optional
/// fractional part (LCD reward amounts carry one). Returns None when the
/// input is not a plain decimal number.
pub fn denom_to_unit(amount: &str, decimals: u32) -> Option<String> {
    let (int_part, frac_part) = match amount.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (amount, ""),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let decimals = decimals as usize;
    let digits = [int_part, frac_part].concat();

    let (whole, frac) = if int_part.len() > decimals {
        let split = int_part.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        let pad = "0".repeat(decimals - int_part.len());
        ("0".to_string(), format!("{}{}", pad, digits))
    };

    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        Some(whole.to_string())
    } else {
        Some(format!("{}.{}", whole, frac))
    }
}
