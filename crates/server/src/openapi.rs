// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Anthem REST API",
        version = "0.1.0",
        description = "REST service backing the Anthem portfolio dashboard. Proxies Cosmos-family LCD nodes, the Oasis indexer and a Celo proxy, normalizing transactions, balances and fiat prices into typed shapes.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/ChorusOne/anthem")
    ),
    servers(
        (url = "http://localhost:4000", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "API version"),
        (name = "networks", description = "Supported networks and their feature flags"),
        (name = "transactions", description = "Transaction lookup with message classification"),
        (name = "accounts", description = "Account balances and transaction listings"),
        (name = "prices", description = "Fiat price quotes"),
    ),
    paths(
        // Health & System
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        crate::handlers::networks::get_networks::get_networks,
        // Chain data
        crate::handlers::transactions::get_transaction::get_transaction,
        crate::handlers::oasis::get_oasis_transactions::get_oasis_transactions,
        crate::handlers::balances::get_balances::get_balances,
        // Prices
        crate::handlers::prices::get_price::get_price,
    ),
)]
pub struct ApiDoc;
