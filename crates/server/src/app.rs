use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

// All endpoints are GETs; anything with a larger body is not a
// legitimate request.
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

use crate::{
    handlers::metrics::{get_metrics, get_metrics_json},
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    routes::{self, root::root_handler},
    state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let api = Router::new()
        .merge(routes::system::routes(registry))
        .merge(routes::networks::routes(registry))
        .merge(routes::oasis::routes(registry))
        .merge(routes::transactions::routes(registry))
        .merge(routes::balances::routes(registry))
        .merge(routes::prices::routes(registry));

    let mut app = Router::new()
        .route("/", get(root_handler))
        .nest(routes::API_VERSION, api)
        .merge(routes::docs::routes());

    // Scrape endpoints stay out of the route registry so they never
    // show up in the public route listing or the OpenAPI document.
    if state.config.metrics.enabled {
        app = app
            .route("/metrics", get(get_metrics))
            .route("/metrics.json", get(get_metrics_json))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                metrics_middleware,
            ));
    }

    app.layer(middleware::from_fn(http_logger_middleware))
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}
