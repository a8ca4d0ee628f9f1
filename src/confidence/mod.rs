//! Confidence and data-quality classification.
//!
//! Both recommendation sources are classified through this module so the
//! API always carries a consistent confidence level and data-quality tier.

use crate::types::{ConfidenceLevel, DataQuality, RecommendationSource};

/// Classifier with tunable thresholds
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceClassifier {
    /// Confidence at or above this is HIGH
    pub high_threshold: f64,
    /// Confidence at or above this (but below high) is MEDIUM
    pub medium_threshold: f64,
    /// Maximum confidence gap for an alternative to count as close
    pub close_alternative_margin: f64,
}

impl Default for ConfidenceClassifier {
    fn default() -> Self {
        Self {
            high_threshold: 0.75,
            medium_threshold: 0.5,
            close_alternative_margin: 0.15,
        }
    }
}

impl ConfidenceClassifier {
    /// Discrete confidence level for a numeric confidence.
    ///
    /// A recommendation with no supporting population is never HIGH or
    /// MEDIUM, even if the raw score looks strong.
    pub fn level(&self, confidence: Option<f64>, total_similar_users: u32) -> ConfidenceLevel {
        if total_similar_users == 0 {
            return ConfidenceLevel::Low;
        }
        match confidence {
            Some(c) if c >= self.high_threshold => ConfidenceLevel::High,
            Some(c) if c >= self.medium_threshold => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }

    /// Data-quality tier. Rule-based results are always LIMITED since they
    /// reflect no population data.
    pub fn quality(
        &self,
        source: RecommendationSource,
        total_similar_users: u32,
        high_rating_ratio: f64,
    ) -> DataQuality {
        if source != RecommendationSource::Statistical {
            return DataQuality::Limited;
        }
        if total_similar_users >= 50 && high_rating_ratio >= 0.7 {
            DataQuality::Excellent
        } else if total_similar_users >= 15 {
            DataQuality::Good
        } else if total_similar_users >= 1 {
            DataQuality::Fair
        } else {
            DataQuality::Limited
        }
    }

    /// True iff an alternative exists and its confidence is within the
    /// close-alternative margin of the recommended size's confidence
    pub fn close_alternative(
        &self,
        recommended: Option<f64>,
        alternative: Option<f64>,
    ) -> bool {
        match (recommended, alternative) {
            (Some(rec), Some(alt)) => (rec - alt).abs() <= self.close_alternative_margin,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        let classifier = ConfidenceClassifier::default();

        assert_eq!(classifier.level(Some(0.75), 10), ConfidenceLevel::High);
        assert_eq!(classifier.level(Some(0.749), 10), ConfidenceLevel::Medium);
        assert_eq!(classifier.level(Some(0.5), 10), ConfidenceLevel::Medium);
        assert_eq!(classifier.level(Some(0.499), 10), ConfidenceLevel::Low);
    }

    #[test]
    fn test_level_absent_confidence_is_low() {
        let classifier = ConfidenceClassifier::default();
        assert_eq!(classifier.level(None, 100), ConfidenceLevel::Low);
    }

    #[test]
    fn test_zero_population_forces_low() {
        let classifier = ConfidenceClassifier::default();
        assert_eq!(classifier.level(Some(0.9), 0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_quality_tiers() {
        let classifier = ConfidenceClassifier::default();
        let statistical = RecommendationSource::Statistical;

        assert_eq!(classifier.quality(statistical, 50, 0.7), DataQuality::Excellent);
        // High population alone is not enough for excellent
        assert_eq!(classifier.quality(statistical, 80, 0.6), DataQuality::Good);
        assert_eq!(classifier.quality(statistical, 15, 0.0), DataQuality::Good);
        assert_eq!(classifier.quality(statistical, 1, 0.0), DataQuality::Fair);
        assert_eq!(classifier.quality(statistical, 0, 1.0), DataQuality::Limited);
    }

    #[test]
    fn test_rule_based_quality_always_limited() {
        let classifier = ConfidenceClassifier::default();
        assert_eq!(
            classifier.quality(RecommendationSource::RuleBased, 100, 1.0),
            DataQuality::Limited
        );
    }

    #[test]
    fn test_close_alternative_margin() {
        let classifier = ConfidenceClassifier::default();

        assert!(classifier.close_alternative(Some(0.8), Some(0.65)));
        assert!(!classifier.close_alternative(Some(0.8), Some(0.64)));
        assert!(!classifier.close_alternative(Some(0.8), None));
        assert!(!classifier.close_alternative(None, Some(0.8)));
    }
}
