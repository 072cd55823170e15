//! Improvement recommendations.
//!
//! Purely threshold-driven: each sub-metric below its cutoff appends one
//! fixed suggestion, then level-specific suggestions follow. Order is
//! deterministic so repeated calls produce identical lists.

use crate::content::Level;
use crate::metrics::QualityMetrics;

/// Metric cutoffs paired with their suggestion strings, checked in order.
const VOCABULARY_CUTOFF: f64 = 0.7;
const GRAMMAR_CUTOFF: f64 = 0.6;
const STRUCTURE_CUTOFF: f64 = 0.7;
const EDUCATIONAL_CUTOFF: f64 = 0.8;
const READABILITY_CUTOFF: f64 = 0.6;

/// Build the suggestion list: metric-based first, then level-specific.
pub(crate) fn improvement_recommendations(
    quality_metrics: &QualityMetrics,
    target: Option<Level>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if quality_metrics.vocabulary_appropriateness < VOCABULARY_CUTOFF {
        recommendations
            .push("Adjust vocabulary difficulty to better match the target level".to_string());
    }
    if quality_metrics.grammar_complexity < GRAMMAR_CUTOFF {
        recommendations.push("Vary sentence patterns to cover more grammar forms".to_string());
    }
    if quality_metrics.content_structure < STRUCTURE_CUTOFF {
        recommendations
            .push("Improve structure with a clear title, paragraphs, and examples".to_string());
    }
    if quality_metrics.educational_value < EDUCATIONAL_CUTOFF {
        recommendations
            .push("Add educational elements such as definitions and exercises".to_string());
    }
    if quality_metrics.readability < READABILITY_CUTOFF {
        recommendations
            .push("Shorten sentences and simplify wording to improve readability".to_string());
    }

    if let Some(level) = target {
        recommendations.push(level_suggestion(level).to_string());
    }

    recommendations
}

const fn level_suggestion(level: Level) -> &'static str {
    match level {
        Level::Cet4 => "Simplify vocabulary and sentence patterns for CET-4 readers",
        Level::Cet5 => "Balance everyday and academic vocabulary for CET-5 readers",
        Level::Cet6 => "Introduce more abstract and sophisticated language for CET-6 readers",
        Level::N5 => "Reduce kanji density and favor short conversational sentences for N5",
        Level::N4 => "Keep kanji simple and reinforce basic grammar patterns for N4",
        Level::N3 => "Mix everyday and written styles with moderate kanji density for N3",
        Level::N2 => "Increase kanji density and formal written expressions for N2",
        Level::N1 => "Use advanced kanji compounds and formal written register for N1",
    }
}
