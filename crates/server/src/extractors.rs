// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Custom Axum extractors.

use axum::Json;
use axum::extract::{FromRequestParts, Query};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

/// [`Query<T>`] with JSON rejections.
///
/// The stock `Query<T>` extractor reports deserialization failures as
/// plain text, which sticks out badly next to handlers that answer
/// `{"error": "..."}` for everything else. This wrapper reshapes the
/// rejection into the same JSON envelope with 400 Bad Request, so an
/// unknown query field (all parameter structs set `deny_unknown_fields`)
/// reads like any other client error.
pub struct JsonQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response()
            })?;
        Ok(JsonQuery(value))
    }
}
