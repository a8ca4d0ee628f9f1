//! HTTP server setup and routing.

mod charts;
mod recommend;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::arbiter::RecommendationArbiter;
use crate::catalog::SizeChartCatalog;
use crate::config::AppConfig;

/// Shared application state passed to all handlers.
///
/// The catalog is immutable after load and the arbiter is stateless per
/// call, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: SizeChartCatalog,
    pub arbiter: Arc<RecommendationArbiter>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let catalog = SizeChartCatalog::builtin();
        let arbiter = RecommendationArbiter::new(catalog, config.policy.clone());
        Self {
            config: Arc::new(config),
            catalog,
            arbiter: Arc::new(arbiter),
        }
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Recommendation engine endpoint
        .route("/recommendations/size", post(recommend::recommend_size))
        // Read-only size chart data, also consumed by UI table rendering
        .route("/charts", get(charts::list_charts))
        .route("/charts/{category}", get(charts::get_chart));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
