//! Read-only size chart endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::{Dimension, SizeChart};
use crate::error::AppError;
use crate::types::{ChartListResponse, SizeChartRowView, SizeChartView};

use super::AppState;

/// List all chart categories
///
/// GET /api/v1/charts
pub async fn list_charts(State(state): State<AppState>) -> Json<ChartListResponse> {
    Json(ChartListResponse {
        categories: state
            .catalog
            .slugs()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Chart for one category, rendered for table display
///
/// GET /api/v1/charts/{category}
pub async fn get_chart(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SizeChartView>, AppError> {
    let chart = state
        .catalog
        .chart(&category)
        .ok_or(AppError::ChartNotFound(category))?;

    Ok(Json(render_chart(chart)))
}

fn render_chart(chart: &SizeChart) -> SizeChartView {
    let measurement_labels: BTreeMap<String, String> = Dimension::ALL
        .into_iter()
        .map(|dim| (dim.key().to_string(), dim.label().to_string()))
        .collect();

    let measurements = chart
        .rows
        .iter()
        .map(|row| SizeChartRowView {
            size: row.size.to_string(),
            chest: row.chest.to_string(),
            waist: row.waist.to_string(),
            hips: row.hips.to_string(),
        })
        .collect();

    SizeChartView {
        title: chart.title.to_string(),
        description: chart.description.map(str::to_string),
        measurement_labels,
        measurements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeChartCatalog;

    #[test]
    fn test_render_chart_rows_as_strings() {
        let chart = SizeChartCatalog::builtin().chart("tshirts").unwrap();
        let view = render_chart(chart);

        assert_eq!(view.title, "T-Shirts");
        let m = view.measurements.iter().find(|r| r.size == "M").unwrap();
        assert_eq!(m.chest, "92-98");
        assert_eq!(m.waist, "76-82");
        assert_eq!(m.hips, "94-100");
        assert_eq!(view.measurement_labels.get("chest").unwrap(), "Chest (cm)");
    }

    #[test]
    fn test_render_reference_value_chart() {
        let chart = SizeChartCatalog::builtin().chart("jeans").unwrap();
        let view = render_chart(chart);

        let row = view.measurements.iter().find(|r| r.size == "30").unwrap();
        assert_eq!(row.chest, "92");
        assert_eq!(row.waist, "74-79");
    }
}
