/// Test that query parameters are properly included in route labels
/// when ANTHEM_METRICS_INCLUDE_QUERYPARAMS is enabled
#[cfg(test)]
mod tests {
    #[test]
    fn test_normalize_route_without_query_params() {
        // Test basic path normalization without query params
        let result = normalize_route(
            "/v1/cosmos/transactions/E6E9A2F52D2D77A6E26A0FD6C2E6C1532C17E08E",
            None,
            false,
        );
        assert_eq!(result, "/v1/cosmos/transactions/:txHash");

        let result = normalize_route("/v1/cosmos/accounts/cosmos1abc/balances", None, false);
        assert_eq!(result, "/v1/cosmos/accounts/:address/balances");
    }

    #[test]
    fn test_normalize_route_with_query_params_disabled() {
        // Even with query string, if disabled, don't include params
        let result = normalize_route(
            "/v1/cosmos/accounts/cosmos1abc/balances",
            Some("denominated=true"),
            false,
        );
        assert_eq!(result, "/v1/cosmos/accounts/:address/balances");
    }

    #[test]
    fn test_normalize_route_with_query_params_enabled() {
        // With query params enabled, include them sorted alphabetically
        let result = normalize_route(
            "/v1/terra/accounts/terra1abc/balances",
            Some("denominated=true&foo=1"),
            true,
        );
        // Should be sorted: denominated before foo
        assert_eq!(
            result,
            "/v1/terra/accounts/:address/balances?denominated=<?>&foo=<?>"
        );
    }

    #[test]
    fn test_normalize_route_query_params_alphabetical_sorting() {
        // Same params in a different order must produce the same label
        let result = normalize_route("/v1/kava/price", Some("z_param=1&a_param=2&m_param=3"), true);
        assert_eq!(result, "/v1/kava/price?a_param=<?>&m_param=<?>&z_param=<?>");
    }

    #[test]
    fn test_normalize_route_empty_query_string() {
        // Empty query string should not add anything
        let result = normalize_route("/v1/networks", Some(""), true);
        assert_eq!(result, "/v1/networks");
    }

    #[test]
    fn test_normalize_route_single_param() {
        let result = normalize_route("/v1/celo/price", Some("currency=eur"), true);
        assert_eq!(result, "/v1/celo/price?currency=<?>");
    }

    #[test]
    fn test_normalize_route_account_transactions() {
        let result = normalize_route(
            "/v1/oasis/accounts/oasis1qz0k5q8vjqvu4s4nwxyj406ylnflkc4vrcjghuwk/transactions",
            None,
            false,
        );
        assert_eq!(result, "/v1/oasis/accounts/:address/transactions");
    }

    // Helper function to normalize routes (copy from middleware for testing)
    fn normalize_route(
        path: &str,
        query_string: Option<&str>,
        include_query_params: bool,
    ) -> String {
        let patterns = vec![
            (r"/transactions/[a-fA-F0-9]+$", "/transactions/:txHash"),
            (r"/accounts/[^/]+/balances$", "/accounts/:address/balances"),
            (
                r"/accounts/[^/]+/transactions$",
                "/accounts/:address/transactions",
            ),
        ];

        let mut normalized = path.to_string();
        for (pattern, replacement) in patterns {
            if let Ok(re) = regex::Regex::new(pattern)
                && re.is_match(&normalized)
            {
                normalized = re.replace(&normalized, replacement).to_string();
                break;
            }
        }

        if include_query_params
            && let Some(query) = query_string
            && !query.is_empty()
        {
            let mut params: Vec<String> = query
                .split('&')
                .filter_map(|pair| pair.split('=').next().map(|name| name.to_string()))
                .collect();

            params.sort();

            let query_params = params
                .iter()
                .map(|name| format!("{}=<?>", name))
                .collect::<Vec<_>>()
                .join("&");

            normalized = format!("{}?{}", normalized, query_params);
        }

        normalized
    }
}
