//! Size recommendation endpoint.

use axum::{extract::State, Json};
use tracing::info;

use crate::error::AppError;
use crate::types::{RecommendRequest, RecommendationResult};

use super::AppState;

/// Produce a size recommendation for a product category.
///
/// The statistical envelope, when present, is supplied by the caller; any
/// upstream failure or timeout is the caller's to map to an absent
/// envelope. Malformed measurements are the only error path.
///
/// POST /api/v1/recommendations/size
pub async fn recommend_size(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendationResult>, AppError> {
    let result = state.arbiter.recommend(
        &req.product_category_slug,
        &req.available_sizes,
        req.measurements.as_ref(),
        req.statistical_envelope.as_ref(),
    )?;

    info!(
        category = %req.product_category_slug,
        source = ?result.source,
        size = result.recommended_size.as_deref().unwrap_or("-"),
        "Recommendation resolved"
    );

    Ok(Json(result))
}
