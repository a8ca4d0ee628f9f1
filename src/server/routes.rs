//! Health and configuration endpoints.

use axum::{extract::State, Json};

use crate::types::{ConfigResponse, HealthResponse, HealthStatus, PolicyInfo, ServerInfo};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.catalog.is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    Json(HealthResponse {
        status,
        version: VERSION.to_string(),
        categories: state.catalog.len(),
    })
}

/// Configuration endpoint (subset safe to expose)
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = &state.config;
    let policy = state.arbiter.policy();

    Json(ConfigResponse {
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        policy: PolicyInfo {
            min_statistical_confidence: policy.min_statistical_confidence,
            fit_preference_bias: policy.fit_preference_bias,
            close_alternative_margin: policy.close_alternative_margin,
        },
    })
}
