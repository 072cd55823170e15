//! English metric functions.

use std::collections::HashSet;

use crate::clamp01;
use crate::content::{Content, Level, LevelFamily};
use crate::tables::LookupTables;
use crate::text;
use crate::word_lists::{
    ADVANCED_ENGLISH_WORDS, EDUCATIONAL_KEYWORDS_EN, SIMPLE_ENGLISH_WORDS,
};

use super::QualityMetrics;

/// Placeholder authenticity for English content pending real analysis.
const AUTHENTICITY: f64 = 0.7;
/// Placeholder cultural relevance for English content pending real analysis.
const CULTURAL_RELEVANCE: f64 = 0.6;

/// Penalty per character of average-word-length distance outside the range.
const WORD_LENGTH_DECAY: f64 = 0.5;
/// Average sentence length (words) where the readability penalty starts.
const COMFORTABLE_SENTENCE_WORDS: f64 = 15.0;
/// Average word length (chars) where the readability penalty starts.
const COMFORTABLE_WORD_CHARS: f64 = 5.0;

pub(crate) fn compute(tables: &LookupTables, content: &Content) -> QualityMetrics {
    let combined = content.combined_text();
    let lower = combined.to_lowercase();
    let sentences = text::split_sentences(&combined);
    let paragraphs = text::split_paragraphs(&content.body);
    let words = text::extract_words(&combined);

    let level = content
        .claimed_level()
        .filter(|l| l.family() == LevelFamily::Cet)
        .unwrap_or(Level::Cet5);

    let avg_sentence_words = if sentences.is_empty() {
        0.0
    } else {
        words.len() as f64 / sentences.len() as f64
    };

    QualityMetrics {
        vocabulary_appropriateness: vocabulary_appropriateness(tables, level, &words),
        grammar_complexity: super::grammar_complexity(
            tables.grammar_patterns(content.language),
            &lower,
            avg_sentence_words,
            40.0,
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
            &lower,
            words.len(),
            content.content_type,
        ),
        authenticity: AUTHENTICITY,
        cultural_relevance: CULTURAL_RELEVANCE,
        readability: readability(&words, &sentences),
        engagement_factor: super::engagement_factor(
            tables,
            content.language,
            &lower,
            words.len(),
        ),
    }
}

/// Average word length in characters; 0.0 for an empty slice.
pub(crate) fn average_word_length(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
}

/// Vocabulary fit against the level's word-length target range.
///
/// Inside the range scores 1.0; outside, the score decays linearly with
/// distance and is floored at 0.3. Level-diagnostic word lists and
/// educational keywords add capped boosts. Empty token set scores 0.0.
fn vocabulary_appropriateness(tables: &LookupTables, level: Level, words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let avg = average_word_length(words);
    let range = tables.english_targets(level).word_length;
    let base = if range.contains(avg) {
        1.0
    } else {
        (1.0 - range.distance(avg) * WORD_LENGTH_DECAY).max(0.3)
    };

    let word_set: HashSet<&str> = words.iter().map(String::as_str).collect();
    let mut boost: f64 = 0.0;
    match level {
        Level::Cet6 if word_set.iter().any(|w| ADVANCED_ENGLISH_WORDS.contains(w)) => {
            boost += 0.1;
        }
        Level::Cet4 if word_set.iter().any(|w| SIMPLE_ENGLISH_WORDS.contains(w)) => {
            boost += 0.1;
        }
        _ => {}
    }
    if EDUCATIONAL_KEYWORDS_EN.iter().any(|k| word_set.contains(k)) {
        boost += 0.1;
    }

    clamp01(base + boost.min(0.2))
}

/// Inverse-length readability: both long sentences and long words penalize.
fn readability(words: &[String], sentences: &[String]) -> f64 {
    if words.is_empty() || sentences.is_empty() {
        return 0.0;
    }
    let avg_sentence = words.len() as f64 / sentences.len() as f64;
    let avg_word = average_word_length(words);

    let sentence_score = 1.0 - ((avg_sentence - COMFORTABLE_SENTENCE_WORDS) / 25.0).max(0.0);
    let word_score = 1.0 - ((avg_word - COMFORTABLE_WORD_CHARS) / 4.0).max(0.0);

    clamp01(0.6f64.mul_add(sentence_score.max(0.0), 0.4 * word_score.max(0.0)))
}
