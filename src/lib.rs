//! Garment Size Recommendation Engine
//!
//! A small storefront sidecar that arbitrates between a statistical
//! (collaborative-filtering) size recommendation and a deterministic
//! rule-based scorer mapping body measurements onto garment size charts.

pub mod arbiter;
pub mod catalog;
pub mod confidence;
pub mod config;
pub mod error;
pub mod measure;
pub mod scoring;
pub mod server;
pub mod types;

pub use arbiter::RecommendationArbiter;
pub use catalog::SizeChartCatalog;
pub use config::{AppConfig, PolicyConfig};
pub use error::{AppError, Result};
pub use types::{RecommendationResult, RecommendationSource};
