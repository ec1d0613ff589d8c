// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests verifying that `deny_unknown_fields` on query parameter structs
//! causes Axum to return 400 Bad Request when unknown query params are sent.
//!
//! These tests exercise the full extraction pipeline against the real app router:
//! HTTP request → JsonQuery<T> extractor → serde deserialization → rejection response.
//! No upstream connection is needed because the extractor rejects the request before
//! the handler body runs.

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use config::AnthemConfig;
    use http_body_util::BodyExt;
    use server::app::create_app;
    use server::state::AppState;
    use tower::ServiceExt;

    // ========================================================================
    // Test helpers
    // ========================================================================

    fn test_app() -> Router {
        let state = AppState::new(AnthemConfig::default()).expect("default config should build");
        create_app(state)
    }

    /// Send a GET request to the app and return (status, body_string).
    async fn send_request(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body).to_string();
        (status, text)
    }

    // ========================================================================
    // Tests: unknown fields are rejected with 400 Bad Request
    // ========================================================================

    #[tokio::test]
    async fn misspelled_networks_param_returns_400() {
        // "availble" instead of "available"
        let (status, body) = send_request(test_app(), "/v1/networks?availble=true").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("unknown field"),
            "Expected 'unknown field' in body, got: {body}"
        );
    }

    #[tokio::test]
    async fn extra_networks_param_returns_400() {
        let (status, body) = send_request(test_app(), "/v1/networks?available=true&extra=1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("unknown field"),
            "Expected 'unknown field' in body, got: {body}"
        );
    }

    #[tokio::test]
    async fn unknown_balances_param_returns_400() {
        // Rejected at extraction, before the handler would contact the LCD node
        let (status, body) = send_request(
            test_app(),
            "/v1/cosmos/accounts/cosmos1yeygh0y8rfyufdczhzytcl3pehsnxv9d3wsnlg/balances?denominated=true&foo=1",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("unknown field"),
            "Expected 'unknown field' in body, got: {body}"
        );
    }

    #[tokio::test]
    async fn unknown_price_param_returns_400() {
        let (status, body) =
            send_request(test_app(), "/v1/cosmos/price?currency=usd&foo=1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("unknown field"),
            "Expected 'unknown field' in body, got: {body}"
        );
    }

    #[tokio::test]
    async fn wrong_case_param_rejected() {
        // "Denominated" instead of "denominated" - camelCase is exact
        let (status, body) = send_request(
            test_app(),
            "/v1/cosmos/accounts/cosmos1yeygh0y8rfyufdczhzytcl3pehsnxv9d3wsnlg/balances?Denominated=true",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("unknown field"),
            "Expected 'unknown field' in body, got: {body}"
        );
    }

    // ========================================================================
    // Tests: valid params still work (200 OK)
    // ========================================================================

    #[tokio::test]
    async fn networks_without_params_returns_200() {
        let (status, _) = send_request(test_app(), "/v1/networks").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn networks_with_valid_param_returns_200() {
        let (status, _) = send_request(test_app(), "/v1/networks?available=true").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_returns_200() {
        let (status, _) = send_request(test_app(), "/v1/health").await;

        assert_eq!(status, StatusCode::OK);
    }

    // ========================================================================
    // Tests: error message quality
    // ========================================================================

    #[tokio::test]
    async fn error_message_mentions_the_unknown_field_name() {
        let (status, body) = send_request(test_app(), "/v1/networks?fooBar=123").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body.contains("fooBar"),
            "Expected error to mention 'fooBar', got: {body}"
        );
    }

    #[tokio::test]
    async fn error_message_suggests_valid_fields() {
        let (_, body) = send_request(test_app(), "/v1/networks?availabl=true").await;

        // serde's deny_unknown_fields error includes "expected ..." with valid field names
        assert!(
            body.contains("available"),
            "Expected error to suggest 'available', got: {body}"
        );
    }

    #[tokio::test]
    async fn rejection_body_is_json() {
        let (_, body) = send_request(test_app(), "/v1/networks?nope=1").await;

        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Rejection body must be JSON");
        assert!(parsed.get("error").is_some());
    }
}
