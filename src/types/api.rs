//! API request and response types for the recommendation endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{StatisticalEnvelope, UserMeasurements};

/// Request body for `POST /api/v1/recommendations/size`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Category slug used for size chart lookup
    pub product_category_slug: String,
    /// Sizes the product actually stocks; empty means no restriction
    #[serde(default)]
    pub available_sizes: Vec<String>,
    /// Shopper measurements; absent when no profile exists
    #[serde(default)]
    pub measurements: Option<UserMeasurements>,
    /// Collaborative-filtering result supplied by the caller, if any
    #[serde(default)]
    pub statistical_envelope: Option<StatisticalEnvelope>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Number of size chart categories loaded
    pub categories: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub policy: PolicyInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

/// Live arbitration policy constants, exposed for deploy-time tuning visibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInfo {
    pub min_statistical_confidence: f64,
    pub fit_preference_bias: f64,
    pub close_alternative_margin: f64,
}

/// Response for `GET /api/v1/charts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartListResponse {
    pub categories: Vec<String>,
}

/// Read-only size chart view, consumed by UI table rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeChartView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dimension key -> display label
    pub measurement_labels: BTreeMap<String, String>,
    pub measurements: Vec<SizeChartRowView>,
}

/// One chart row with ranges rendered as display strings ("92-98", "86")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeChartRowView {
    pub size: String,
    pub chest: String,
    pub waist: String,
    pub hips: String,
}
