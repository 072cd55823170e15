//! Japanese metric functions.

use crate::clamp01;
use crate::content::{Content, Level, LevelFamily};
use crate::tables::LookupTables;
use crate::text::{self, ScriptProfile};

use super::QualityMetrics;

/// Placeholder authenticity for Japanese content pending real analysis.
const AUTHENTICITY: f64 = 0.8;
/// Placeholder cultural relevance for Japanese content pending real analysis.
const CULTURAL_RELEVANCE: f64 = 0.7;

/// Penalty per unit of kanji-ratio distance outside the target range.
const KANJI_RATIO_DECAY: f64 = 2.0;
/// Kanji ratio considered easiest to read; readability decays away from it.
const OPTIMAL_KANJI_RATIO: f64 = 0.3;

pub(crate) fn compute(tables: &LookupTables, content: &Content) -> QualityMetrics {
    let combined = content.combined_text();
    let sentences = text::split_sentences(&combined);
    let paragraphs = text::split_paragraphs(&content.body);
    let profile = text::script_profile(&combined);

    let level = content
        .claimed_level()
        .filter(|l| l.family() == LevelFamily::Jlpt)
        .unwrap_or(Level::N3);

    // Rough word-unit count for density metrics: Japanese averages about
    // two script characters per word.
    let unit_count = (profile.total / 2).max(1);

    let avg_sentence_chars = if sentences.is_empty() {
        0.0
    } else {
        profile.total as f64 / sentences.len() as f64
    };

    QualityMetrics {
        vocabulary_appropriateness: vocabulary_appropriateness(tables, level, &combined, profile),
        grammar_complexity: super::grammar_complexity(
            tables.grammar_patterns(content.language),
            &combined,
            avg_sentence_chars,
            80.0,
        ),
        content_structure: super::content_structure(
            tables,
            content,
            sentences.len(),
            paragraphs.len(),
        ),
        educational_value: super::educational_value(
            tables,
            content.language,
            &combined,
            unit_count,
            content.content_type,
        ),
        authenticity: AUTHENTICITY,
        cultural_relevance: CULTURAL_RELEVANCE,
        readability: readability(profile),
        engagement_factor: super::engagement_factor(
            tables,
            content.language,
            &combined,
            unit_count,
        ),
    }
}

/// Vocabulary fit against the level's kanji-ratio target range.
///
/// Same shape as the English variant: 1.0 inside the range, linear decay
/// floored at 0.3 outside, capped boosts for level vocabulary and
/// educational keywords. Text with no Japanese script scores 0.0.
fn vocabulary_appropriateness(
    tables: &LookupTables,
    level: Level,
    text: &str,
    profile: ScriptProfile,
) -> f64 {
    if profile.total == 0 {
        return 0.0;
    }
    let ratio = profile.kanji_ratio();
    let range = tables.japanese_targets(level).kanji_ratio;
    let base = if range.contains(ratio) {
        1.0
    } else {
        (1.0 - range.distance(ratio) * KANJI_RATIO_DECAY).max(0.3)
    };

    let mut boost: f64 = 0.0;
    if tables
        .level_vocabulary(level)
        .iter()
        .any(|word| text.contains(word))
    {
        boost += 0.1;
    }
    if tables.educational_hits(crate::content::Language::Japanese, text) > 0 {
        boost += 0.1;
    }

    clamp01(base + boost.min(0.2))
}

/// Hiragana share plus closeness of the kanji ratio to its optimal midpoint.
fn readability(profile: ScriptProfile) -> f64 {
    if profile.total == 0 {
        return 0.0;
    }
    let kanji_fit =
        1.0 - ((profile.kanji_ratio() - OPTIMAL_KANJI_RATIO).abs() / OPTIMAL_KANJI_RATIO).min(1.0);
    clamp01(0.6f64.mul_add(profile.hiragana_ratio(), 0.4 * kanji_fit))
}
