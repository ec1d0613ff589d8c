use crate::routes::RouteRegistry;
use crate::upstream::UpstreamClient;
use config::AnthemConfig;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AnthemConfig,
    pub upstream: UpstreamClient,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: AnthemConfig) -> Result<Self, crate::upstream::UpstreamError> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        Ok(Self {
            config,
            upstream,
            route_registry: RouteRegistry::new(),
        })
    }
}
