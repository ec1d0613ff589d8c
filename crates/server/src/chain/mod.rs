// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod balance;
pub mod classify;
pub mod event;
pub mod msg;

pub use balance::{AccountBalances, AccountBalancesResponse, BalanceShape, CeloAccountBalances, classify_balance_shape};
pub use classify::{MsgKind, classify_message};
pub use event::{OasisEventKind, OasisTransactionEvent};
pub use msg::{Coin, MsgDecodeError, TxMsg};
