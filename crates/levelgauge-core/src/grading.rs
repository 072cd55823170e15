//! Level grading and appropriateness validation.
//!
//! [`ContentGrader`] owns the immutable lookup tables and exposes the
//! grading, validation, recommendation, and extraction entry points. Every
//! call is a pure function of the content and the tables, so a single grader
//! can be shared freely across threads.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::clamp01;
use crate::config::Config;
use crate::content::{Content, Language, Level, LevelFamily};
use crate::extract::{self, VocabularyItem};
use crate::metrics::{self, QualityMetrics};
use crate::recommend;
use crate::tables::LookupTables;
use crate::text;

/// Minimum confidence ever reported for graded content.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Per-level score floor: no level is ever reported as completely
/// inappropriate.
const LEVEL_SCORE_FLOOR: f64 = 0.3;

/// Assigned level for content in an unrecognized language.
const FALLBACK_LEVEL: &str = "intermediate";

/// Default cap on extracted vocabulary items per content item.
const DEFAULT_MAX_VOCABULARY_ITEMS: usize = 10;

/// Result of grading one content item against its language family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LevelGradingResult {
    /// The best-matching level (or "intermediate" for unknown languages).
    pub assigned_level: String,
    /// Match score of the assigned level; always ≥ 0.3 and always equal to
    /// `level_scores[assigned_level]`.
    pub confidence_score: f64,
    /// Match score for every level in the content's language family.
    pub level_scores: BTreeMap<String, f64>,
    /// The metrics the scores were derived from.
    pub quality_metrics: QualityMetrics,
    /// Actionable improvement suggestions, metric-based first.
    pub recommendations: Vec<String>,
}

/// Grades content against the CET and JLPT taxonomies.
#[derive(Debug)]
pub struct ContentGrader {
    tables: LookupTables,
    max_vocabulary_items: usize,
}

impl Default for ContentGrader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentGrader {
    /// Build a grader with the built-in lookup tables.
    pub fn new() -> Self {
        Self::with_tables(LookupTables::new())
    }

    /// Build a grader with caller-supplied tables.
    pub fn with_tables(tables: LookupTables) -> Self {
        Self {
            tables,
            max_vocabulary_items: DEFAULT_MAX_VOCABULARY_ITEMS,
        }
    }

    /// Build a grader honoring configuration overrides.
    pub fn from_config(config: &Config) -> Self {
        Self {
            tables: LookupTables::new(),
            max_vocabulary_items: config
                .max_vocabulary_items
                .unwrap_or(DEFAULT_MAX_VOCABULARY_ITEMS),
        }
    }

    /// The lookup tables this grader was built with.
    pub const fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Compute the eight quality sub-metrics for `content`.
    #[instrument(skip_all, fields(content_id = %content.content_id, language = %content.language))]
    pub fn compute_metrics(&self, content: &Content) -> QualityMetrics {
        metrics::compute(&self.tables, content)
    }

    /// Grade `content` against every level in its language family.
    #[instrument(skip_all, fields(content_id = %content.content_id, language = %content.language))]
    pub fn grade_content_level(&self, content: &Content) -> LevelGradingResult {
        let quality_metrics = metrics::compute(&self.tables, content);

        let (level_scores, assigned_level) = match content.language {
            Language::English => self.english_scores(content, &quality_metrics),
            Language::Japanese => self.japanese_scores(content, &quality_metrics),
            Language::Other => {
                let mut scores = BTreeMap::new();
                scores.insert(FALLBACK_LEVEL.to_string(), 0.5);
                (scores, FALLBACK_LEVEL.to_string())
            }
        };

        let mut level_scores = level_scores;
        let mut confidence_score = level_scores
            .get(&assigned_level)
            .copied()
            .unwrap_or(CONFIDENCE_FLOOR);
        if confidence_score < CONFIDENCE_FLOOR {
            confidence_score = (confidence_score + 0.1).max(CONFIDENCE_FLOOR);
            // Confidence and the stored level score must never disagree.
            level_scores.insert(assigned_level.clone(), confidence_score);
        }

        let recommendations =
            recommend::improvement_recommendations(&quality_metrics, Level::parse(&assigned_level));

        tracing::debug!(assigned = %assigned_level, confidence = confidence_score, "graded content");

        LevelGradingResult {
            assigned_level,
            confidence_score,
            level_scores,
            quality_metrics,
            recommendations,
        }
    }

    /// Grade a batch of content items. Sequential; calls are independent, so
    /// callers that want parallelism can split the slice themselves.
    pub fn grade_batch(&self, contents: &[Content]) -> Vec<LevelGradingResult> {
        contents
            .iter()
            .map(|content| self.grade_content_level(content))
            .collect()
    }

    /// Fitness of `content` for an arbitrary target level, in [0.0, 1.0].
    ///
    /// Cross-family targets (and unparseable targets for English/Japanese
    /// content) short-circuit to 0.0. Content in an unrecognized language
    /// answers 0.5 for anything except its own fallback level.
    #[instrument(skip_all, fields(content_id = %content.content_id, target = target_level))]
    pub fn validate_level_appropriateness(&self, content: &Content, target_level: &str) -> f64 {
        match content.language {
            Language::English => {
                self.validate_in_family(content, target_level, LevelFamily::Cet, 0.3)
            }
            Language::Japanese => {
                self.validate_in_family(content, target_level, LevelFamily::Jlpt, 0.2)
            }
            Language::Other => {
                let result = self.grade_content_level(content);
                result.level_scores.get(target_level).copied().unwrap_or(0.5)
            }
        }
    }

    fn validate_in_family(
        &self,
        content: &Content,
        target_level: &str,
        family: LevelFamily,
        decay_step: f64,
    ) -> f64 {
        let Some(target) = Level::parse(target_level).filter(|t| t.family() == family) else {
            return 0.0;
        };
        let result = self.grade_content_level(content);
        if let Some(score) = result.level_scores.get(target.as_str()) {
            return *score;
        }
        // Score map is expected to cover the whole family; distance decay
        // keeps the answer sensible if it ever does not.
        Level::parse(&result.assigned_level).map_or(0.5, |assigned| {
            (1.0 - assigned.rank().abs_diff(target.rank()) as f64 * decay_step).max(0.0)
        })
    }

    /// Improvement suggestions for bringing `content` toward `target_level`.
    #[instrument(skip_all, fields(content_id = %content.content_id, target = target_level))]
    pub fn generate_improvement_recommendations(
        &self,
        content: &Content,
        target_level: &str,
    ) -> Vec<String> {
        let quality_metrics = metrics::compute(&self.tables, content);
        recommend::improvement_recommendations(&quality_metrics, Level::parse(target_level))
    }

    /// Extract up to ten vocabulary items from `content`.
    #[instrument(skip_all, fields(content_id = %content.content_id, language = %content.language))]
    pub fn extract_level_vocabulary(&self, content: &Content) -> Vec<VocabularyItem> {
        extract::extract_level_vocabulary(&self.tables, content, self.max_vocabulary_items)
    }

    fn english_scores(
        &self,
        content: &Content,
        quality_metrics: &QualityMetrics,
    ) -> (BTreeMap<String, f64>, String) {
        let combined = content.combined_text();
        let sentences = text::split_sentences(&combined);
        let words = text::extract_words(&combined);
        let avg_word = metrics::english::average_word_length(&words);
        let avg_sentence = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f64 / sentences.len() as f64
        };

        let base = 0.4f64.mul_add(
            quality_metrics.vocabulary_appropriateness,
            0.3f64.mul_add(
                quality_metrics.readability,
                0.3 * quality_metrics.educational_value,
            ),
        );

        let mut scores = BTreeMap::new();
        let mut best: Option<(&str, f64)> = None;
        for targets in self.tables.english_levels() {
            let word_match = ratio_match(avg_word, targets.word_length.midpoint());
            let sentence_match = ratio_match(avg_sentence, targets.sentence_length);
            let complexity_match =
                1.0 - (quality_metrics.grammar_complexity - targets.complexity).abs();
            let level_match = 0.3f64.mul_add(
                word_match,
                0.3f64.mul_add(sentence_match, 0.4 * complexity_match),
            );
            let boost = english_boost(targets.level, quality_metrics);
            let score = (0.4f64.mul_add(base, 0.6 * level_match) + boost)
                .clamp(LEVEL_SCORE_FLOOR, 1.0);

            scores.insert(targets.level.as_str().to_string(), score);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((targets.level.as_str(), score));
            }
        }
        let (assigned, _) = best.expect("at least one CET level");
        (scores, assigned.to_string())
    }

    fn japanese_scores(
        &self,
        content: &Content,
        quality_metrics: &QualityMetrics,
    ) -> (BTreeMap<String, f64>, String) {
        let combined = content.combined_text();
        let sentences = text::split_sentences(&combined);
        let profile = text::script_profile(&combined);
        let kanji_ratio = profile.kanji_ratio();
        let hiragana_ratio = profile.hiragana_ratio();
        let avg_sentence = if sentences.is_empty() {
            0.0
        } else {
            profile.total as f64 / sentences.len() as f64
        };

        let base = 0.4f64.mul_add(
            quality_metrics.vocabulary_appropriateness,
            0.3f64.mul_add(
                quality_metrics.authenticity,
                0.3 * quality_metrics.educational_value,
            ),
        );

        let mut scores = BTreeMap::new();
        let mut best: Option<(&str, f64)> = None;
        for targets in self.tables.japanese_levels() {
            // Kanji ratios live in [0, ~0.6]; a half-unit span normalizes
            // the distance into [0, 1].
            let kanji_match =
                clamp01(1.0 - (kanji_ratio - targets.kanji_ratio.midpoint()).abs() / 0.5);
            let sentence_match = ratio_match(avg_sentence, targets.sentence_length);
            let complexity_match =
                1.0 - (quality_metrics.grammar_complexity - targets.complexity).abs();
            let level_match = 0.3f64.mul_add(
                kanji_match,
                0.3f64.mul_add(sentence_match, 0.4 * complexity_match),
            );
            let boost =
                japanese_boost(targets.level, kanji_ratio, hiragana_ratio, quality_metrics);
            let score = (0.4f64.mul_add(base, 0.6 * level_match) + boost)
                .clamp(LEVEL_SCORE_FLOOR, 1.0);

            scores.insert(targets.level.as_str().to_string(), score);
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((targets.level.as_str(), score));
            }
        }
        let (assigned, _) = best.expect("at least one JLPT level");
        (scores, assigned.to_string())
    }
}

/// 1.0 minus the normalized distance between actual and target, in [0, 1].
fn ratio_match(actual: f64, target: f64) -> f64 {
    clamp01(1.0 - (actual - target).abs() / target)
}

fn english_boost(level: Level, quality_metrics: &QualityMetrics) -> f64 {
    let complexity = quality_metrics.grammar_complexity;
    let mut boost = match level {
        Level::Cet4 if complexity < 0.3 => 0.15,
        Level::Cet6 if complexity > 0.6 => 0.15,
        Level::Cet5 if (0.3..=0.6).contains(&complexity) => 0.10,
        _ => 0.0,
    };
    if quality_metrics.vocabulary_appropriateness > 0.7 {
        boost += 0.10;
    }
    boost
}

fn japanese_boost(
    level: Level,
    kanji_ratio: f64,
    hiragana_ratio: f64,
    quality_metrics: &QualityMetrics,
) -> f64 {
    let mut boost = match level {
        Level::N5 if kanji_ratio < 0.15 && hiragana_ratio > 0.5 => 0.15,
        Level::N1 if kanji_ratio > 0.35 => 0.15,
        Level::N3 | Level::N2 if (0.18..=0.35).contains(&kanji_ratio) => 0.10,
        _ => 0.0,
    };
    if quality_metrics.vocabulary_appropriateness > 0.7 {
        boost += 0.10;
    }
    boost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentType;

    fn grader() -> ContentGrader {
        ContentGrader::new()
    }

    fn english(body: &str) -> Content {
        Content {
            content_id: "c1".to_string(),
            body: body.to_string(),
            language: Language::English,
            content_type: ContentType::Article,
            ..Content::default()
        }
    }

    fn japanese(body: &str) -> Content {
        Content {
            content_id: "c2".to_string(),
            body: body.to_string(),
            language: Language::Japanese,
            ..Content::default()
        }
    }

    const SIMPLE_ENGLISH: &str =
        "I am a student. I go to school. My friend is nice. We study together.";

    const ACADEMIC_ENGLISH: &str = "The committee has been convened to evaluate the proposed \
        methodology in considerable depth. However, the empirical framework was criticized \
        because its underlying assumptions were considered ambiguous. Consequently, researchers \
        should reformulate the preliminary hypothesis, which demonstrates the sophistication \
        expected of contemporary academic discourse.";

    #[test]
    fn simple_english_grades_low() {
        let result = grader().grade_content_level(&english(SIMPLE_ENGLISH));
        assert!(result.quality_metrics.grammar_complexity < 0.3);
        assert!(
            result.assigned_level == "CET-4" || result.assigned_level == "CET-5",
            "unexpected level {}",
            result.assigned_level
        );
    }

    #[test]
    fn academic_english_grades_high() {
        let result = grader().grade_content_level(&english(ACADEMIC_ENGLISH));
        assert!(result.quality_metrics.grammar_complexity > 0.6);
        assert_eq!(result.assigned_level, "CET-6");
    }

    #[test]
    fn empty_content_still_grades() {
        let result = grader().grade_content_level(&english(""));
        assert_eq!(result.quality_metrics.vocabulary_appropriateness, 0.0);
        assert!(result.quality_metrics.content_structure < 0.1);
        assert_eq!(result.level_scores.len(), 3);
        for score in result.level_scores.values() {
            assert!(*score >= LEVEL_SCORE_FLOOR);
        }
        assert!(result.confidence_score >= CONFIDENCE_FLOOR);
    }

    #[test]
    fn hiragana_text_grades_n5_with_boost() {
        let body = "わたしは がくせいです。まいにち がっこうへ いきます。とても たのしいです。";
        let result = grader().grade_content_level(&japanese(body));
        assert_eq!(result.assigned_level, "N5");
        // The N5 boost should put clear distance between N5 and N4.
        let n5 = result.level_scores["N5"];
        let n4 = result.level_scores["N4"];
        assert!(n5 - n4 >= 0.1, "expected boosted gap, got {n5} vs {n4}");
    }

    #[test]
    fn argmax_and_confidence_are_consistent() {
        for body in [SIMPLE_ENGLISH, ACADEMIC_ENGLISH, ""] {
            let result = grader().grade_content_level(&english(body));
            let max = result
                .level_scores
                .values()
                .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            assert_eq!(result.level_scores[&result.assigned_level], max);
            assert_eq!(result.level_scores[&result.assigned_level], result.confidence_score);
        }
    }

    #[test]
    fn level_scores_stay_in_family() {
        let result = grader().grade_content_level(&english(SIMPLE_ENGLISH));
        assert_eq!(result.level_scores.len(), 3);
        assert!(result.level_scores.keys().all(|k| k.starts_with("CET-")));

        let result = grader().grade_content_level(&japanese("日本語のテキストです。"));
        assert_eq!(result.level_scores.len(), 5);
        assert!(result.level_scores.keys().all(|k| k.starts_with('N')));
    }

    #[test]
    fn unknown_language_gets_fallback_result() {
        let content = Content {
            body: "texto en español".to_string(),
            language: Language::Other,
            ..Content::default()
        };
        let result = grader().grade_content_level(&content);
        assert_eq!(result.assigned_level, "intermediate");
        assert_eq!(result.confidence_score, 0.5);
        assert_eq!(result.level_scores.len(), 1);
        assert_eq!(result.quality_metrics, QualityMetrics::generic());
    }

    #[test]
    fn grading_is_idempotent() {
        let content = english(ACADEMIC_ENGLISH);
        let g = grader();
        assert_eq!(g.grade_content_level(&content), g.grade_content_level(&content));
    }

    #[test]
    fn cross_family_validation_is_zero() {
        let g = grader();
        let en = english(SIMPLE_ENGLISH);
        assert_eq!(g.validate_level_appropriateness(&en, "N5"), 0.0);
        assert_eq!(g.validate_level_appropriateness(&en, "B2"), 0.0);

        let ja = japanese("日本語のテキストです。");
        assert_eq!(g.validate_level_appropriateness(&ja, "CET-4"), 0.0);
    }

    #[test]
    fn in_family_validation_returns_level_score() {
        let g = grader();
        let content = english(ACADEMIC_ENGLISH);
        let result = g.grade_content_level(&content);
        let fit = g.validate_level_appropriateness(&content, "CET-5");
        assert_eq!(fit, result.level_scores["CET-5"]);
    }

    #[test]
    fn assigned_level_fits_better_than_distant_level() {
        let g = grader();
        let content = english(ACADEMIC_ENGLISH);
        let near = g.validate_level_appropriateness(&content, "CET-6");
        let far = g.validate_level_appropriateness(&content, "CET-4");
        assert!(far < near, "expected {far} < {near}");
    }

    #[test]
    fn unknown_language_validation_defaults() {
        let content = Content {
            body: "texte".to_string(),
            language: Language::Other,
            ..Content::default()
        };
        let g = grader();
        assert_eq!(g.validate_level_appropriateness(&content, "intermediate"), 0.5);
        assert_eq!(g.validate_level_appropriateness(&content, "anything"), 0.5);
    }

    #[test]
    fn batch_matches_individual_grading() {
        let g = grader();
        let contents = vec![english(SIMPLE_ENGLISH), english(ACADEMIC_ENGLISH)];
        let batch = g.grade_batch(&contents);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], g.grade_content_level(&contents[0]));
    }

    #[test]
    fn recommendations_follow_metrics_then_level() {
        let result = grader().grade_content_level(&english(""));
        assert!(!result.recommendations.is_empty());
    }
}
