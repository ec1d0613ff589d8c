// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{openapi::ApiDoc, state::AppState};
use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

// Like the scrape endpoints, the document itself stays out of the
// route registry.
pub fn routes() -> Router<AppState> {
    Router::new().route("/docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
