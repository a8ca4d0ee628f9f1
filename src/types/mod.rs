//! Shared types for the size recommendation API.
//!
//! These types are used across the application for request/response handling
//! and internal data representation.

pub mod api;

use serde::{Deserialize, Serialize};

pub use api::*;

/// Shopper gender as recorded in the measurement profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BellyShape {
    Flat,
    #[default]
    Normal,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HipShape {
    Narrow,
    #[default]
    Normal,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChestShape {
    Slim,
    #[default]
    Normal,
    Broad,
}

/// User-chosen bias shifting size selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitPreference {
    Tight,
    #[default]
    Comfortable,
    Loose,
}

/// Raw body measurements supplied by the caller, immutable per call.
///
/// Lengths are centimeters, weight is kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeasurements {
    pub gender: Gender,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    /// Precomputed BMI; derived from height/weight when absent
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub belly_shape: Option<BellyShape>,
    #[serde(default)]
    pub hip_shape: Option<HipShape>,
    #[serde(default)]
    pub chest_shape: Option<ChestShape>,
    #[serde(default)]
    pub fit_preference: FitPreference,
    #[serde(default)]
    pub has_return_history: bool,
}

/// Origin of a recommendation, for traceability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationSource {
    Statistical,
    RuleBased,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    #[default]
    Low,
}

/// How much population evidence backs a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataQuality {
    Excellent,
    Good,
    Fair,
    #[default]
    Limited,
}

/// A size with an associated confidence, used for alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeConfidence {
    pub size: String,
    pub confidence: f64,
}

/// Supporting statistics and derived classifications for a recommendation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationMetadata {
    pub total_similar_users: u32,
    pub total_purchases: u32,
    /// Average rating on a 0-5 scale
    pub average_rating: f64,
    /// Share of ratings at 4 stars or above, 0-1
    pub high_rating_ratio: f64,
    pub confidence_level: ConfidenceLevel,
    pub data_quality: DataQuality,
    pub has_close_alternative: bool,
}

/// Recommendation envelope produced by the upstream collaborative
/// filtering service, passed through by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticalEnvelope {
    pub recommended_size: Option<String>,
    pub confidence: Option<f64>,
    pub alternatives: Vec<SizeConfidence>,
    pub metadata: RecommendationMetadata,
}

/// Unified recommendation output, one per call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub recommended_size: Option<String>,
    pub confidence: Option<f64>,
    pub alternatives: Vec<SizeConfidence>,
    pub metadata: Option<RecommendationMetadata>,
    pub has_measurements: bool,
    pub source: RecommendationSource,
}

impl RecommendationResult {
    /// Terminal result for a caller without a measurement profile
    pub fn no_measurements() -> Self {
        Self {
            recommended_size: None,
            confidence: None,
            alternatives: Vec::new(),
            metadata: None,
            has_measurements: false,
            source: RecommendationSource::None,
        }
    }
}
