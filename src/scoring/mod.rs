//! Rule-based size scoring.
//!
//! Maps normalized body measurements onto a size chart: every candidate size
//! gets a scalar distance (lower = better fit), the minimum wins, and the
//! better-fitting adjacent size becomes the runner-up. The scorer only
//! ranks; confidence is derived downstream from the distance.

use crate::catalog::{Dimension, SizeChart, SizeRow};
use crate::measure::NormalizedMeasurements;
use crate::types::FitPreference;

/// Distance comparisons treat values within this epsilon as ties
const DISTANCE_EPS: f64 = 1e-9;

/// Scoring could not produce a recommendation; callers degrade to
/// "no rule-based recommendation available"
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotScorable {
    #[error("no usable measurement dimensions")]
    MissingDimensions,
    #[error("no chart size is available for this product")]
    EmptyCandidates,
}

/// Deviation of one body dimension from a size's range, normalized by the
/// chart's typical range width for that dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionDeviation {
    pub dimension: Dimension,
    pub deviation: f64,
}

/// A scored chart size
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub size: String,
    /// Unbiased combined distance; fit-preference bias only affects
    /// selection, keeping this table auditable
    pub distance: f64,
    pub deviations: Vec<DimensionDeviation>,
}

/// Scoring outcome: the best match and its better-fitting chart neighbor
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub best: CandidateScore,
    pub runner_up: Option<CandidateScore>,
}

/// Rule-based size scorer with tunable policy constants
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedScorer {
    /// Distance penalty applied to sizes on the wrong side of the user's
    /// fit preference
    pub fit_bias: f64,
    /// Typical range width in cm when a chart dimension only carries
    /// reference values
    pub fallback_range_width: f64,
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self {
            fit_bias: 0.35,
            fallback_range_width: 6.0,
        }
    }
}

struct Candidate<'a> {
    row: &'a SizeRow,
    deviations: Vec<DimensionDeviation>,
    distance: f64,
    biased_distance: f64,
}

impl Candidate<'_> {
    fn max_deviation(&self) -> f64 {
        self.deviations
            .iter()
            .map(|d| d.deviation)
            .fold(0.0, f64::max)
    }

    fn score(&self) -> CandidateScore {
        CandidateScore {
            size: self.row.size.to_string(),
            distance: self.distance,
            deviations: self.deviations.clone(),
        }
    }
}

impl RuleBasedScorer {
    /// Score every candidate size and pick best plus adjacent runner-up.
    ///
    /// `available_sizes` restricts candidacy to sizes the product stocks;
    /// an empty slice means no restriction. Sizes are excluded before
    /// scoring, so adjacency is defined over the restricted sequence.
    pub fn score(
        &self,
        measurements: &NormalizedMeasurements,
        chart: &SizeChart,
        available_sizes: &[String],
    ) -> Result<ScoreOutcome, NotScorable> {
        let dimensions = measurements.present_dimensions();
        if dimensions.is_empty() {
            return Err(NotScorable::MissingDimensions);
        }

        let rows: Vec<&SizeRow> = chart
            .rows
            .iter()
            .filter(|row| {
                available_sizes.is_empty()
                    || available_sizes
                        .iter()
                        .any(|s| s.eq_ignore_ascii_case(row.size))
            })
            .collect();
        if rows.is_empty() {
            return Err(NotScorable::EmptyCandidates);
        }

        let widths: Vec<(Dimension, f64)> = dimensions
            .iter()
            .map(|dim| (*dim, chart.typical_width(*dim, self.fallback_range_width)))
            .collect();

        let candidates: Vec<Candidate<'_>> = rows
            .into_iter()
            .map(|row| self.evaluate(row, measurements, &widths))
            .collect();

        let best_idx = self.select_best(&candidates);
        let runner_up = self
            .select_runner_up(&candidates, best_idx)
            .map(|idx| candidates[idx].score());

        Ok(ScoreOutcome {
            best: candidates[best_idx].score(),
            runner_up,
        })
    }

    fn evaluate<'a>(
        &self,
        row: &'a SizeRow,
        measurements: &NormalizedMeasurements,
        widths: &[(Dimension, f64)],
    ) -> Candidate<'a> {
        let mut deviations = Vec::with_capacity(widths.len());
        // Net side of the size relative to the body: positive when the
        // size runs large, negative when it runs small
        let mut side = 0;

        for (dimension, width) in widths {
            // present_dimensions guarantees the value exists
            let value = measurements
                .dimension(*dimension)
                .expect("dimension filtered as present");
            let range = row.range(*dimension);
            deviations.push(DimensionDeviation {
                dimension: *dimension,
                deviation: range.distance_to(value) / width,
            });
            side += range.side_of(value);
        }

        // Equal weights over present dimensions, renormalized: the mean
        let distance =
            deviations.iter().map(|d| d.deviation).sum::<f64>() / deviations.len() as f64;

        let penalized = match measurements.fit_preference {
            FitPreference::Tight => side > 0,
            FitPreference::Loose => side < 0,
            FitPreference::Comfortable => false,
        };
        let biased_distance = if penalized {
            distance + self.fit_bias
        } else {
            distance
        };

        Candidate {
            row,
            deviations,
            distance,
            biased_distance,
        }
    }

    /// Minimum biased distance wins. Ties break on the per-dimension
    /// breakdown (smaller worst-case deviation), then toward the larger
    /// size: shoppers tolerate looser fit better than tighter.
    fn select_best(&self, candidates: &[Candidate<'_>]) -> usize {
        let mut best = 0;
        for idx in 1..candidates.len() {
            let challenger = &candidates[idx];
            let current = &candidates[best];
            let delta = challenger.biased_distance - current.biased_distance;
            if delta < -DISTANCE_EPS {
                best = idx;
            } else if delta.abs() <= DISTANCE_EPS {
                let dev_delta = challenger.max_deviation() - current.max_deviation();
                if dev_delta < -DISTANCE_EPS || dev_delta.abs() <= DISTANCE_EPS {
                    // candidates are in chart order, so the later index is
                    // the larger size
                    best = idx;
                }
            }
        }
        best
    }

    /// The adjacent size with the lower distance, ties toward the larger
    /// neighbor. None when the best size has no neighbor.
    fn select_runner_up(&self, candidates: &[Candidate<'_>], best_idx: usize) -> Option<usize> {
        let smaller = best_idx.checked_sub(1);
        let larger = (best_idx + 1 < candidates.len()).then_some(best_idx + 1);

        match (smaller, larger) {
            (None, None) => None,
            (Some(idx), None) | (None, Some(idx)) => Some(idx),
            (Some(lo), Some(hi)) => {
                let delta = candidates[lo].biased_distance - candidates[hi].biased_distance;
                if delta < -DISTANCE_EPS {
                    Some(lo)
                } else {
                    Some(hi)
                }
            }
        }
    }
}
