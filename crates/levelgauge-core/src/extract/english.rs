//! English extraction strategies and fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::content::{Content, Level, LevelFamily};
use crate::tables::LookupTables;
use crate::text;
use crate::word_lists::{ENGLISH_COMMON_WORDS, META_WORDS};

use super::{Candidate, ExtractionStrategy};

/// Strategies in decreasing order of markup strictness.
static STRATEGIES: LazyLock<Vec<ExtractionStrategy>> = LazyLock::new(|| {
    vec![
        // "word - definition - example sentence"
        ExtractionStrategy::new(
            "word-definition-example line",
            r"(?m)^\s*(?P<word>[A-Za-z]+)\s*[-–—:]\s*(?P<definition>[^-–—\n]{5,}?)\s*[-–—]\s*(?P<example>[^\n]{5,}?)\s*$",
        ),
        // "word - definition"
        ExtractionStrategy::new(
            "word-definition line",
            r"(?m)^\s*(?P<word>[A-Za-z]+)\s*[-–—:]\s*(?P<definition>[^\n]{5,}?)\s*$",
        ),
        // "X means Y" inside running prose
        ExtractionStrategy::new(
            "means clause",
            r"\b(?P<word>[A-Za-z]+)\s+means\s+(?P<definition>[^.!?\n]{5,})",
        ),
        // "word (inline gloss)"
        ExtractionStrategy::new(
            "parenthetical gloss",
            r"\b(?P<word>[A-Za-z]+)\s*\((?P<definition>[^)]{5,})\)",
        ),
    ]
});

pub(crate) fn strategies() -> &'static [ExtractionStrategy] {
    &STRATEGIES
}

/// Word of at least three alphabetic characters, not markup vocabulary,
/// with a nontrivial definition when one was captured.
pub(crate) fn is_valid(candidate: &Candidate) -> bool {
    let word = candidate.word.as_str();
    if word.chars().count() < 3 || !word.chars().all(char::is_alphabetic) {
        return false;
    }
    if META_WORDS.contains(word.to_lowercase().as_str()) {
        return false;
    }
    candidate
        .definition
        .as_deref()
        .is_none_or(|d| d.trim().chars().count() >= 5)
}

/// Set-intersection fallback: tokens that belong to the level vocabulary,
/// with definitions recovered from the surrounding context when possible.
pub(crate) fn fallback(tables: &LookupTables, content: &Content, combined: &str) -> Vec<Candidate> {
    let level = content
        .claimed_level()
        .filter(|l| l.family() == LevelFamily::Cet)
        .unwrap_or(Level::Cet5);
    let vocabulary = tables.level_vocabulary(level);

    let mut candidates = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for word in text::extract_words(combined) {
        if word.chars().count() < 3
            || ENGLISH_COMMON_WORDS.contains(word.as_str())
            || !vocabulary.contains(word.as_str())
            || !seen.insert(word.clone())
        {
            continue;
        }
        let definition = context_definition(combined, &word);
        candidates.push(Candidate {
            word,
            reading: None,
            definition,
            example: None,
        });
    }
    candidates
}

/// Light-weight context pattern: "<word> is/means/refers to ...".
fn context_definition(combined: &str, word: &str) -> Option<String> {
    let pattern = format!(
        r"(?i)\b{}\s+(?:is|means|refers to)\s+([^.!?\n]{{5,}})",
        regex::escape(word)
    );
    Regex::new(&pattern)
        .ok()?
        .captures(combined)
        .map(|caps| caps[1].trim().to_string())
}
