//! Root endpoint handler.
//!
//! Returns API information and a list of every registered route, so a
//! bare GET / doubles as a directory of the service.

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "docs": "/docs/openapi.json",
        "github": "https://github.com/ChorusOne/anthem",
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "routes": routes
    }))
}
