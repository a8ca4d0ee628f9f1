//! Measurement validation and normalization.
//!
//! This is the only validation boundary of the engine: every other
//! component assumes normalized input.

use crate::catalog::Dimension;
use crate::types::{
    BellyShape, ChestShape, FitPreference, Gender, HipShape, UserMeasurements,
};

/// Malformed measurement input, surfaced verbatim to the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid measurement field '{field}': {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn not_positive(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be a positive number".to_string(),
        }
    }
}

/// Validated measurements with derived attributes filled in.
///
/// Shape fields default to NORMAL when the user did not supply them; this
/// is a policy default, not a per-user guess.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMeasurements {
    pub gender: Gender,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub belly_shape: BellyShape,
    pub hip_shape: HipShape,
    pub chest_shape: ChestShape,
    pub fit_preference: FitPreference,
    pub has_return_history: bool,
}

impl NormalizedMeasurements {
    /// The user's value for a chart dimension, if supplied
    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Chest => self.chest,
            Dimension::Waist => self.waist,
            Dimension::Hips => self.hips,
        }
    }

    /// Dimensions the user actually supplied, in chart order
    pub fn present_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dim| self.dimension(*dim).is_some())
            .collect()
    }
}

/// Validate raw measurements and derive secondary attributes.
///
/// Fails when height or weight is not positive, or when any supplied body
/// dimension is not positive.
pub fn normalize(raw: &UserMeasurements) -> Result<NormalizedMeasurements, ValidationError> {
    require_positive("height", raw.height)?;
    require_positive("weight", raw.weight)?;
    require_positive_opt("chest", raw.chest)?;
    require_positive_opt("waist", raw.waist)?;
    require_positive_opt("hips", raw.hips)?;

    let bmi = match raw.bmi {
        Some(value) => round1(value),
        None => {
            let height_m = raw.height / 100.0;
            round1(raw.weight / (height_m * height_m))
        }
    };

    Ok(NormalizedMeasurements {
        gender: raw.gender,
        age: raw.age,
        height: raw.height,
        weight: raw.weight,
        chest: raw.chest,
        waist: raw.waist,
        hips: raw.hips,
        bmi,
        belly_shape: raw.belly_shape.unwrap_or_default(),
        hip_shape: raw.hip_shape.unwrap_or_default(),
        chest_shape: raw.chest_shape.unwrap_or_default(),
        fit_preference: raw.fit_preference,
        has_return_history: raw.has_return_history,
    })
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::not_positive(field));
    }
    Ok(())
}

fn require_positive_opt(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_positive(field, v),
        None => Ok(()),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> UserMeasurements {
        UserMeasurements {
            gender: Gender::Male,
            age: 34,
            height: 180.0,
            weight: 78.0,
            chest: Some(96.0),
            waist: Some(80.0),
            hips: Some(98.0),
            bmi: None,
            belly_shape: None,
            hip_shape: None,
            chest_shape: None,
            fit_preference: FitPreference::Comfortable,
            has_return_history: false,
        }
    }

    #[test]
    fn test_bmi_computed_and_rounded() {
        let normalized = normalize(&base()).unwrap();
        // 78 / 1.8^2 = 24.074 -> 24.1
        assert_eq!(normalized.bmi, 24.1);
    }

    #[test]
    fn test_supplied_bmi_kept() {
        let mut raw = base();
        raw.bmi = Some(23.45);
        let normalized = normalize(&raw).unwrap();
        assert_eq!(normalized.bmi, 23.5);
    }

    #[test]
    fn test_shape_defaults() {
        let normalized = normalize(&base()).unwrap();
        assert_eq!(normalized.belly_shape, BellyShape::Normal);
        assert_eq!(normalized.hip_shape, HipShape::Normal);
        assert_eq!(normalized.chest_shape, ChestShape::Normal);
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let mut raw = base();
        raw.height = 0.0;
        let err = normalize(&raw).unwrap_err();
        assert_eq!(err.field, "height");
    }

    #[test]
    fn test_rejects_non_positive_supplied_dimension() {
        let mut raw = base();
        raw.waist = Some(-3.0);
        let err = normalize(&raw).unwrap_err();
        assert_eq!(err.field, "waist");
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let mut raw = base();
        raw.weight = f64::NAN;
        assert!(normalize(&raw).is_err());
    }

    #[test]
    fn test_missing_dimensions_allowed() {
        let mut raw = base();
        raw.chest = None;
        raw.hips = None;
        let normalized = normalize(&raw).unwrap();
        assert_eq!(normalized.present_dimensions(), vec![Dimension::Waist]);
    }
}
