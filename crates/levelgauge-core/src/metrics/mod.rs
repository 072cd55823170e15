//! Quality metrics computation.
//!
//! Eight independent sub-metrics per content item, each a pure function of
//! the content text and the lookup tables, each clamped into [0.0, 1.0].
//! Dispatch is keyed on [`Language`]; unrecognized languages get a fixed
//! generic metrics instance and no computation is attempted.

pub(crate) mod english;
pub(crate) mod japanese;

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clamp01;
use crate::content::{Content, ContentType, Language};
use crate::tables::{GrammarPattern, LookupTables};

/// Grammar complexity reported for text matching zero patterns.
pub(crate) const MIN_GRAMMAR_COMPLEXITY: f64 = 0.1;

/// List/enumeration markers at line starts (-, *, bullets, "1.", "①").
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*•・]|\d+[.)]|[①-⑩])").expect("valid regex"));

/// The eight quality sub-metrics, each in [0.0, 1.0].
///
/// Produced fresh per call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityMetrics {
    /// How well vocabulary complexity fits the claimed level.
    pub vocabulary_appropriateness: f64,
    /// Weighted density of surface grammar patterns.
    pub grammar_complexity: f64,
    /// Structural well-formedness (title, length, paragraphs, lists).
    pub content_structure: f64,
    /// Density of instructional keywords and explanatory connectives.
    pub educational_value: f64,
    /// Placeholder constant per language; no real linguistic analysis.
    pub authenticity: f64,
    /// Placeholder constant per language; no real linguistic analysis.
    pub cultural_relevance: f64,
    /// Ease of reading for the target audience.
    pub readability: f64,
    /// Interactive phrasing and question/exclamation presence.
    pub engagement_factor: f64,
}

impl QualityMetrics {
    /// Fixed mid-range metrics for content in an unrecognized language.
    pub const fn generic() -> Self {
        Self {
            vocabulary_appropriateness: 0.5,
            grammar_complexity: 0.5,
            content_structure: 0.5,
            educational_value: 0.5,
            authenticity: 0.5,
            cultural_relevance: 0.5,
            readability: 0.5,
            engagement_factor: 0.5,
        }
    }
}

/// Compute metrics for `content`, dispatched on its language.
pub(crate) fn compute(tables: &LookupTables, content: &Content) -> QualityMetrics {
    match content.language {
        Language::English => english::compute(tables, content),
        Language::Japanese => japanese::compute(tables, content),
        Language::Other => QualityMetrics::generic(),
    }
}

/// Weighted grammar complexity over surface patterns.
///
/// Each matched pattern contributes `weight × min(occurrences, 3)`; the sum
/// is normalized by the count of distinct patterns matched so short texts
/// with few but complex patterns are not over-penalized. A sentence-length
/// factor (capped at 0.2) is added on top. Pattern-free text gets a fixed
/// floor instead of 0.0.
pub(crate) fn grammar_complexity(
    patterns: &[GrammarPattern],
    text: &str,
    avg_sentence_units: f64,
    unit_scale: f64,
) -> f64 {
    let mut accumulated = 0.0;
    let mut matched = 0usize;
    for pattern in patterns {
        let count = pattern.regex.find_iter(text).count();
        if count > 0 {
            accumulated += pattern.weight * count.min(3) as f64;
            matched += 1;
            tracing::trace!(pattern = pattern.name, count, "grammar pattern matched");
        }
    }
    if matched == 0 {
        return MIN_GRAMMAR_COMPLEXITY;
    }
    let normalized = accumulated / matched as f64;
    let length_factor = (avg_sentence_units / unit_scale).min(1.0) * 0.2;
    clamp01(normalized + length_factor)
}

/// Additive structural score from independent signals, capped at 1.0.
pub(crate) fn content_structure(
    tables: &LookupTables,
    content: &Content,
    sentence_count: usize,
    paragraph_count: usize,
) -> f64 {
    let mut score: f64 = 0.0;
    if content.title.trim().chars().count() >= 5 {
        score += 0.15;
    }
    let body_len = content.body.chars().count();
    if (100..=2000).contains(&body_len) {
        score += 0.25;
    } else if body_len > 50 {
        score += 0.15;
    }
    if sentence_count >= 3 {
        score += 0.2;
    }
    if paragraph_count >= 2 {
        score += 0.15;
    }
    if LIST_MARKER.is_match(&content.body) {
        score += 0.1;
    }
    if tables.explanatory_hits(content.language, &content.body) > 0 {
        score += 0.15;
    }
    score.min(1.0)
}

/// Educational value: keyword density, explanatory density, content-type base.
pub(crate) fn educational_value(
    tables: &LookupTables,
    language: Language,
    text: &str,
    unit_count: usize,
    content_type: ContentType,
) -> f64 {
    let units = unit_count.max(1) as f64;
    let keyword = (tables.educational_hits(language, text) as f64 / units * 10.0).min(0.4);
    let explanatory = (tables.explanatory_hits(language, text) as f64 / units * 8.0).min(0.3);
    let base = match content_type {
        ContentType::Exercise => 0.3,
        ContentType::Article | ContentType::Dialogue => 0.25,
        ContentType::Audio | ContentType::Video => 0.2,
        ContentType::News | ContentType::Cultural => 0.15,
    };
    clamp01(keyword + explanatory + base)
}

/// Engagement: interactive phrasing density plus question/exclamation marks.
pub(crate) fn engagement_factor(
    tables: &LookupTables,
    language: Language,
    text: &str,
    unit_count: usize,
) -> f64 {
    let units = unit_count.max(1) as f64;
    let mut score = (tables.interactive_hits(language, text) as f64 / units * 12.0).min(0.5);
    if text.contains(['?', '？']) {
        score += 0.25;
    }
    if text.contains(['!', '！']) {
        score += 0.15;
    }
    clamp01(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Level;

    fn tables() -> LookupTables {
        LookupTables::new()
    }

    fn english_content(body: &str) -> Content {
        Content {
            title: "A Short Lesson".to_string(),
            body: body.to_string(),
            language: Language::English,
            ..Content::default()
        }
    }

    #[test]
    fn generic_metrics_for_unknown_language() {
        let content = Content {
            body: "quelques mots en français".to_string(),
            language: Language::Other,
            ..Content::default()
        };
        let metrics = compute(&tables(), &content);
        assert_eq!(metrics, QualityMetrics::generic());
    }

    #[test]
    fn all_metrics_bounded() {
        let content = english_content(
            "Do you want to learn? For example, practice every day! \
             The research was conducted carefully, which demonstrated substantial results. \
             However, the methodology should be reviewed because errors were identified.",
        );
        let metrics = compute(&tables(), &content);
        for value in [
            metrics.vocabulary_appropriateness,
            metrics.grammar_complexity,
            metrics.content_structure,
            metrics.educational_value,
            metrics.authenticity,
            metrics.cultural_relevance,
            metrics.readability,
            metrics.engagement_factor,
        ] {
            assert!((0.0..=1.0).contains(&value), "metric out of bounds: {value}");
        }
    }

    #[test]
    fn simple_text_has_low_grammar_complexity() {
        let tables = tables();
        let text = "i am a student. i go to school. my friend is nice. we study together.";
        let complexity = grammar_complexity(
            tables.grammar_patterns(Language::English),
            text,
            3.75,
            40.0,
        );
        assert!(complexity < 0.3, "expected < 0.3, got {complexity}");
    }

    #[test]
    fn pattern_free_text_gets_floor() {
        let tables = tables();
        let complexity =
            grammar_complexity(tables.grammar_patterns(Language::English), "xyzzy", 1.0, 40.0);
        assert_eq!(complexity, MIN_GRAMMAR_COMPLEXITY);
    }

    #[test]
    fn empty_content_has_near_zero_structure() {
        let content = Content {
            language: Language::English,
            ..Content::default()
        };
        let structure = content_structure(&tables(), &content, 0, 0);
        assert!(structure < 0.1);
    }

    #[test]
    fn exercises_score_higher_educational_base() {
        let tables = tables();
        let exercise =
            educational_value(&tables, Language::English, "plain text", 2, ContentType::Exercise);
        let news = educational_value(&tables, Language::English, "plain text", 2, ContentType::News);
        assert!(exercise > news);
    }

    #[test]
    fn questions_raise_engagement() {
        let tables = tables();
        let flat = engagement_factor(&tables, Language::English, "a statement", 2);
        let lively = engagement_factor(&tables, Language::English, "do you agree? great!", 4);
        assert!(lively > flat);
    }

    #[test]
    fn vocabulary_empty_text_is_zero() {
        let content = Content {
            language: Language::English,
            difficulty_level: Some(Level::Cet4.as_str().to_string()),
            ..Content::default()
        };
        let metrics = compute(&tables(), &content);
        assert_eq!(metrics.vocabulary_appropriateness, 0.0);
    }
}
