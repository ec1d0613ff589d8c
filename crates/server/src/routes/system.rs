// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::{health, version},
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

/// Service-level endpoints: liveness and running version.
pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/health",
            "get",
            get(health::get_health),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/version",
            "get",
            get(version::get_version),
        )
}
