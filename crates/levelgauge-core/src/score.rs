//! Aggregate quality scoring.
//!
//! Combines a subset of the quality metrics with source signals the caller
//! computed outside this core (URL trust, timestamps). This crate owns only
//! the combination formula.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clamp01;
use crate::metrics::QualityMetrics;

/// Caller-supplied source signals, each expected in [0.0, 1.0].
///
/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SourceSignals {
    /// Trustworthiness of the source (e.g., from a URL trust list).
    pub reliability: f64,
    /// Recency of the content (e.g., from crawl timestamps).
    pub freshness: f64,
}

/// Aggregate quality score for admission decisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityScore {
    /// Weighted overall score in [0.0, 1.0].
    pub overall: f64,
    /// Educational value carried over from the metrics.
    pub educational_value: f64,
    /// Readability carried over from the metrics.
    pub readability: f64,
    /// Engagement carried over from the metrics.
    pub engagement: f64,
    /// Source reliability as supplied (clamped).
    pub source_reliability: f64,
    /// Freshness as supplied (clamped).
    pub freshness: f64,
}

impl QualityScore {
    /// Weights: educational 0.30, readability 0.20, engagement 0.15,
    /// reliability 0.20, freshness 0.15.
    pub fn compose(quality_metrics: &QualityMetrics, signals: SourceSignals) -> Self {
        let educational_value = clamp01(quality_metrics.educational_value);
        let readability = clamp01(quality_metrics.readability);
        let engagement = clamp01(quality_metrics.engagement_factor);
        let source_reliability = clamp01(signals.reliability);
        let freshness = clamp01(signals.freshness);

        let overall = clamp01(
            0.30 * educational_value
                + 0.20 * readability
                + 0.15 * engagement
                + 0.20 * source_reliability
                + 0.15 * freshness,
        );

        Self {
            overall,
            educational_value,
            readability,
            engagement,
            source_reliability,
            freshness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_inputs_score_one() {
        let metrics = QualityMetrics {
            vocabulary_appropriateness: 1.0,
            grammar_complexity: 1.0,
            content_structure: 1.0,
            educational_value: 1.0,
            authenticity: 1.0,
            cultural_relevance: 1.0,
            readability: 1.0,
            engagement_factor: 1.0,
        };
        let signals = SourceSignals {
            reliability: 1.0,
            freshness: 1.0,
        };
        let score = QualityScore::compose(&metrics, signals);
        assert!((score.overall - 1.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_signals_are_clamped() {
        let metrics = QualityMetrics::generic();
        let signals = SourceSignals {
            reliability: 7.0,
            freshness: -2.0,
        };
        let score = QualityScore::compose(&metrics, signals);
        assert_eq!(score.source_reliability, 1.0);
        assert_eq!(score.freshness, 0.0);
        assert!((0.0..=1.0).contains(&score.overall));
    }

    #[test]
    fn reliability_moves_the_overall_score() {
        let metrics = QualityMetrics::generic();
        let low = QualityScore::compose(
            &metrics,
            SourceSignals {
                reliability: 0.0,
                freshness: 0.5,
            },
        );
        let high = QualityScore::compose(
            &metrics,
            SourceSignals {
                reliability: 1.0,
                freshness: 0.5,
            },
        );
        assert!(high.overall > low.overall);
    }
}
