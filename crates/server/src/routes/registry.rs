//! Route registry for dynamic endpoint introspection.
//!
//! Every route is recorded here as it is mounted, so the root
//! endpoint can return the full list of paths the server answers.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// Prefix under which all versioned API routes are mounted.
pub const API_VERSION: &str = "/v1";

/// Information about a registered route.
#[derive(Clone, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/v1/:network/transactions/:txHash")
    pub path: String,
    /// The HTTP method (e.g., "get", "post")
    pub method: String,
}

/// A thread-safe registry of mounted routes.
///
/// Entries are kept as a sorted set, so the listing comes out in a
/// stable order no matter how the routers were merged, and mounting
/// the same path twice records it once.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<BTreeSet<(String, String)>>>);

impl RouteRegistry {
    /// Create a new empty route registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mounted route.
    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.insert((path.to_string(), method.to_string()));
        }
    }

    /// All registered routes, sorted by path.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let Ok(routes) = self.0.read() else {
            return Vec::new();
        };
        routes
            .iter()
            .map(|(path, method)| RouteInfo {
                path: path.clone(),
                method: method.clone(),
            })
            .collect()
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Mount a route and record it in the registry.
    ///
    /// The registry entry carries `prefix` + `path` (the public path),
    /// while the router itself is given the bare `path`, since these
    /// routers are nested under the prefix in `create_app`.
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(&format!("{}{}", prefix, path), method);
        self.route(path, handler)
    }
}
