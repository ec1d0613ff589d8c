// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::oasis,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

// The static oasis segment takes precedence over /:network params at
// match time, so this never shadows the generic account routes.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(
        registry,
        API_VERSION,
        "/oasis/accounts/:address/transactions",
        "get",
        get(oasis::get_oasis_transactions),
    )
}
