//! Recommendation arbitration.
//!
//! Top-level entry point of the engine: decides whether to trust a
//! supplied statistical recommendation or fall back to rule-based scoring,
//! and always terminates in a well-formed [`RecommendationResult`]. Only
//! malformed measurements produce an error, and that is the caller's to
//! surface.

use crate::catalog::SizeChartCatalog;
use crate::confidence::ConfidenceClassifier;
use crate::config::PolicyConfig;
use crate::measure::{self, NormalizedMeasurements, ValidationError};
use crate::scoring::{CandidateScore, RuleBasedScorer, ScoreOutcome};
use crate::types::{
    RecommendationMetadata, RecommendationResult, RecommendationSource, SizeConfidence,
    StatisticalEnvelope, UserMeasurements,
};

/// Arbitrates between the statistical and rule-based recommendation paths
#[derive(Debug, Clone)]
pub struct RecommendationArbiter {
    catalog: SizeChartCatalog,
    policy: PolicyConfig,
    scorer: RuleBasedScorer,
    classifier: ConfidenceClassifier,
}

impl RecommendationArbiter {
    pub fn new(catalog: SizeChartCatalog, policy: PolicyConfig) -> Self {
        let scorer = RuleBasedScorer {
            fit_bias: policy.fit_preference_bias,
            fallback_range_width: policy.fallback_range_width_cm,
        };
        let classifier = ConfidenceClassifier {
            close_alternative_margin: policy.close_alternative_margin,
            ..ConfidenceClassifier::default()
        };
        Self {
            catalog,
            policy,
            scorer,
            classifier,
        }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Produce a single unified recommendation.
    ///
    /// Policy, in order: no measurements short-circuits to a NONE result;
    /// a statistical envelope at or above the minimum confidence is
    /// accepted as-is; anything weaker is discarded entirely and the
    /// rule-based path runs against the category's chart restricted to the
    /// stocked sizes. A missing chart or unscorable input degrades to a
    /// NONE result, never an error.
    pub fn recommend(
        &self,
        category_slug: &str,
        available_sizes: &[String],
        measurements: Option<&UserMeasurements>,
        statistical: Option<&StatisticalEnvelope>,
    ) -> Result<RecommendationResult, ValidationError> {
        let Some(raw) = measurements else {
            return Ok(RecommendationResult::no_measurements());
        };
        let normalized = measure::normalize(raw)?;

        if let Some(envelope) = statistical {
            if envelope.recommended_size.is_some() && self.accepts(envelope) {
                return Ok(self.statistical_result(envelope));
            }
            // Rejected envelopes are discarded, not blended: one clearly
            // attributable recommendation beats a merged one.
        }

        Ok(self.rule_based_result(category_slug, available_sizes, &normalized))
    }

    /// Acceptance check for the statistical envelope. Confidence exactly at
    /// the threshold is accepted; absent confidence never is.
    fn accepts(&self, envelope: &StatisticalEnvelope) -> bool {
        envelope
            .confidence
            .is_some_and(|c| c >= self.policy.min_statistical_confidence)
    }

    fn statistical_result(&self, envelope: &StatisticalEnvelope) -> RecommendationResult {
        let stats = &envelope.metadata;
        let best_alternative = envelope.alternatives.first().map(|alt| alt.confidence);

        // Acceptance and confidence level are independent checks: an
        // accepted envelope with no supporting population still reads LOW.
        let metadata = RecommendationMetadata {
            total_similar_users: stats.total_similar_users,
            total_purchases: stats.total_purchases,
            average_rating: stats.average_rating,
            high_rating_ratio: stats.high_rating_ratio,
            confidence_level: self
                .classifier
                .level(envelope.confidence, stats.total_similar_users),
            data_quality: self.classifier.quality(
                RecommendationSource::Statistical,
                stats.total_similar_users,
                stats.high_rating_ratio,
            ),
            has_close_alternative: self
                .classifier
                .close_alternative(envelope.confidence, best_alternative),
        };

        RecommendationResult {
            recommended_size: envelope.recommended_size.clone(),
            confidence: envelope.confidence,
            alternatives: envelope.alternatives.clone(),
            metadata: Some(metadata),
            has_measurements: true,
            source: RecommendationSource::Statistical,
        }
    }

    fn rule_based_result(
        &self,
        category_slug: &str,
        available_sizes: &[String],
        normalized: &NormalizedMeasurements,
    ) -> RecommendationResult {
        let Some(chart) = self.catalog.chart(category_slug) else {
            return self.degraded_result();
        };

        match self.scorer.score(normalized, chart, available_sizes) {
            Ok(outcome) => self.scored_result(&outcome),
            Err(_) => self.degraded_result(),
        }
    }

    fn scored_result(&self, outcome: &ScoreOutcome) -> RecommendationResult {
        let confidence = derived_confidence(&outcome.best);
        let alternatives: Vec<SizeConfidence> = outcome
            .runner_up
            .as_ref()
            .map(|runner_up| SizeConfidence {
                size: runner_up.size.clone(),
                confidence: derived_confidence(runner_up),
            })
            .into_iter()
            .collect();

        let metadata = RecommendationMetadata {
            // Rule-based recommendations have no population behind them
            total_similar_users: 0,
            total_purchases: 0,
            average_rating: 0.0,
            high_rating_ratio: 0.0,
            confidence_level: self.classifier.level(Some(confidence), 0),
            data_quality: self.classifier.quality(
                RecommendationSource::RuleBased,
                0,
                0.0,
            ),
            has_close_alternative: self.classifier.close_alternative(
                Some(confidence),
                alternatives.first().map(|alt| alt.confidence),
            ),
        };

        RecommendationResult {
            recommended_size: Some(outcome.best.size.clone()),
            confidence: Some(confidence),
            alternatives,
            metadata: Some(metadata),
            has_measurements: true,
            source: RecommendationSource::RuleBased,
        }
    }

    /// Measurements exist but no chart or no scorable dimensions: a
    /// legitimate "no recommendation" outcome, tagged LOW/LIMITED
    fn degraded_result(&self) -> RecommendationResult {
        RecommendationResult {
            recommended_size: None,
            confidence: None,
            alternatives: Vec::new(),
            metadata: Some(RecommendationMetadata::default()),
            has_measurements: true,
            source: RecommendationSource::None,
        }
    }
}

/// Confidence from the unbiased scoring distance, clamped to [0, 1].
/// An exact match on every present dimension yields 1.0.
fn derived_confidence(candidate: &CandidateScore) -> f64 {
    (1.0 - candidate.distance).clamp(0.0, 1.0)
}
