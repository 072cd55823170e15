//! Immutable lookup tables consumed by the metrics calculator and level grader.
//!
//! Per-level targets, grammar pattern→weight lists, keyword automatons, and
//! level vocabulary sets. A [`LookupTables`] value is built once, injected
//! into the grader, and never mutated, so it is freely shareable across
//! threads.

use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::content::{Language, Level};
use crate::word_lists;

/// An inclusive target range for a surface indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl TargetRange {
    /// Is `x` inside the range?
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Center of the range.
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.min, self.max)
    }

    /// Distance from `x` to the nearest bound; 0.0 inside the range.
    pub fn distance(&self, x: f64) -> f64 {
        if x < self.min {
            self.min - x
        } else if x > self.max {
            x - self.max
        } else {
            0.0
        }
    }
}

/// Per-level surface targets for English content.
#[derive(Debug, Clone)]
pub struct EnglishLevelTargets {
    /// The level these targets describe.
    pub level: Level,
    /// Acceptable average word length (characters).
    pub word_length: TargetRange,
    /// Target average sentence length (words).
    pub sentence_length: f64,
    /// Target grammar complexity.
    pub complexity: f64,
}

/// Per-level surface targets for Japanese content.
#[derive(Debug, Clone)]
pub struct JapaneseLevelTargets {
    /// The level these targets describe.
    pub level: Level,
    /// Acceptable kanji ratio among Japanese script characters.
    pub kanji_ratio: TargetRange,
    /// Target average sentence length (characters).
    pub sentence_length: f64,
    /// Target grammar complexity.
    pub complexity: f64,
}

/// A weighted surface grammar pattern.
#[derive(Debug)]
pub struct GrammarPattern {
    /// Short pattern name, for tracing.
    pub name: &'static str,
    /// Compiled matcher.
    pub regex: Regex,
    /// Complexity weight in [0, 1].
    pub weight: f64,
}

impl GrammarPattern {
    fn new(name: &'static str, pattern: &str, weight: f64) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("valid regex"),
            weight,
        }
    }
}

/// Read-only reference data for grading and extraction.
#[derive(Debug)]
pub struct LookupTables {
    english_levels: Vec<EnglishLevelTargets>,
    japanese_levels: Vec<JapaneseLevelTargets>,
    english_grammar: Vec<GrammarPattern>,
    japanese_grammar: Vec<GrammarPattern>,
    educational_en: AhoCorasick,
    educational_ja: AhoCorasick,
    explanatory_en: AhoCorasick,
    explanatory_ja: AhoCorasick,
    interactive_en: AhoCorasick,
    interactive_ja: AhoCorasick,
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupTables {
    /// Build the built-in tables. Called once at grader construction.
    pub fn new() -> Self {
        let automaton = |patterns: &[&str]| {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(patterns)
                .expect("valid automaton")
        };

        Self {
            english_levels: vec![
                EnglishLevelTargets {
                    level: Level::Cet4,
                    word_length: TargetRange { min: 3.5, max: 5.0 },
                    sentence_length: 12.0,
                    complexity: 0.35,
                },
                EnglishLevelTargets {
                    level: Level::Cet5,
                    word_length: TargetRange { min: 4.2, max: 5.8 },
                    sentence_length: 15.0,
                    complexity: 0.55,
                },
                EnglishLevelTargets {
                    level: Level::Cet6,
                    word_length: TargetRange { min: 4.8, max: 6.5 },
                    sentence_length: 18.0,
                    complexity: 0.75,
                },
            ],
            japanese_levels: vec![
                JapaneseLevelTargets {
                    level: Level::N5,
                    kanji_ratio: TargetRange { min: 0.0, max: 0.15 },
                    sentence_length: 20.0,
                    complexity: 0.2,
                },
                JapaneseLevelTargets {
                    level: Level::N4,
                    kanji_ratio: TargetRange { min: 0.10, max: 0.25 },
                    sentence_length: 25.0,
                    complexity: 0.35,
                },
                JapaneseLevelTargets {
                    level: Level::N3,
                    kanji_ratio: TargetRange { min: 0.20, max: 0.35 },
                    sentence_length: 30.0,
                    complexity: 0.5,
                },
                JapaneseLevelTargets {
                    level: Level::N2,
                    kanji_ratio: TargetRange { min: 0.30, max: 0.45 },
                    sentence_length: 35.0,
                    complexity: 0.65,
                },
                JapaneseLevelTargets {
                    level: Level::N1,
                    kanji_ratio: TargetRange { min: 0.40, max: 0.60 },
                    sentence_length: 40.0,
                    complexity: 0.8,
                },
            ],
            english_grammar: vec![
                GrammarPattern::new("present simple", r"\b(am|is|are|do|does)\b", 0.1),
                GrammarPattern::new("past tense", r"\b\w{2,}ed\b", 0.3),
                GrammarPattern::new("future will", r"\bwill\s+\w+", 0.25),
                GrammarPattern::new(
                    "modal verbs",
                    r"\b(can|could|may|might|should|would|must)\b",
                    0.4,
                ),
                GrammarPattern::new("conditional", r"\bif\s+\w+", 0.45),
                GrammarPattern::new("relative clauses", r"\b(which|whose|whom)\b", 0.5),
                GrammarPattern::new("perfect aspect", r"\b(have|has|had)\s+\w+(ed|en)\b", 0.6),
                GrammarPattern::new(
                    "connective adverbs",
                    r"\b(however|therefore|moreover|furthermore|nevertheless|consequently)\b",
                    0.6,
                ),
                GrammarPattern::new(
                    "passive voice",
                    r"\b(am|is|are|was|were|be|been|being)\s+\w+(ed|en)\b",
                    0.7,
                ),
                GrammarPattern::new(
                    "formal subordination",
                    r"\b(although|whereas|unless|whilst|albeit|notwithstanding)\b",
                    0.7,
                ),
            ],
            japanese_grammar: vec![
                GrammarPattern::new("polite desu/masu", r"(です|ます)", 0.1),
                GrammarPattern::new("volitional/suggestion", r"(ましょう|でしょう)", 0.25),
                GrammarPattern::new("progressive te-iru", r"てい(る|ます|た)", 0.3),
                GrammarPattern::new("conditional", r"(れば|たら|なら)", 0.45),
                GrammarPattern::new(
                    "connectives",
                    r"(しかし|したがって|さらに|一方|つまり|なぜなら)",
                    0.5,
                ),
                GrammarPattern::new("passive sareru", r"され(る|た|て)", 0.55),
                GrammarPattern::new("potential/passive rareru", r"られ(る|た|て)", 0.6),
                GrammarPattern::new("causative saseru", r"させ(る|た|て|られ)", 0.7),
                GrammarPattern::new(
                    "honorific",
                    r"(いらっしゃ|ございま|おっしゃ|いただ|なさい)",
                    0.75,
                ),
                GrammarPattern::new(
                    "formal written",
                    r"(である|により|において|に関して|に対して)",
                    0.8,
                ),
            ],
            educational_en: automaton(word_lists::EDUCATIONAL_KEYWORDS_EN),
            educational_ja: automaton(word_lists::EDUCATIONAL_KEYWORDS_JA),
            explanatory_en: automaton(word_lists::EXPLANATORY_MARKERS_EN),
            explanatory_ja: automaton(word_lists::EXPLANATORY_MARKERS_JA),
            interactive_en: automaton(word_lists::INTERACTIVE_PHRASES_EN),
            interactive_ja: automaton(word_lists::INTERACTIVE_PHRASES_JA),
        }
    }

    /// English level targets, easiest first.
    pub fn english_levels(&self) -> &[EnglishLevelTargets] {
        &self.english_levels
    }

    /// Japanese level targets, easiest first.
    pub fn japanese_levels(&self) -> &[JapaneseLevelTargets] {
        &self.japanese_levels
    }

    /// Targets for one English level.
    pub fn english_targets(&self, level: Level) -> &EnglishLevelTargets {
        self.english_levels
            .iter()
            .find(|t| t.level == level)
            .expect("CET level present in tables")
    }

    /// Targets for one Japanese level.
    pub fn japanese_targets(&self, level: Level) -> &JapaneseLevelTargets {
        self.japanese_levels
            .iter()
            .find(|t| t.level == level)
            .expect("JLPT level present in tables")
    }

    /// Grammar patterns for `language`; empty for unrecognized languages.
    pub fn grammar_patterns(&self, language: Language) -> &[GrammarPattern] {
        match language {
            Language::English => &self.english_grammar,
            Language::Japanese => &self.japanese_grammar,
            Language::Other => &[],
        }
    }

    /// Count educational-keyword hits in `text`.
    pub fn educational_hits(&self, language: Language, text: &str) -> usize {
        self.automaton_for(language, &self.educational_en, &self.educational_ja)
            .map_or(0, |ac| ac.find_iter(text).count())
    }

    /// Count explanatory-marker hits in `text`.
    pub fn explanatory_hits(&self, language: Language, text: &str) -> usize {
        self.automaton_for(language, &self.explanatory_en, &self.explanatory_ja)
            .map_or(0, |ac| ac.find_iter(text).count())
    }

    /// Count interactive-phrase hits in `text`.
    pub fn interactive_hits(&self, language: Language, text: &str) -> usize {
        self.automaton_for(language, &self.interactive_en, &self.interactive_ja)
            .map_or(0, |ac| ac.find_iter(text).count())
    }

    fn automaton_for<'a>(
        &self,
        language: Language,
        en: &'a AhoCorasick,
        ja: &'a AhoCorasick,
    ) -> Option<&'a AhoCorasick> {
        match language {
            Language::English => Some(en),
            Language::Japanese => Some(ja),
            Language::Other => None,
        }
    }

    /// Vocabulary sample for one level, used by the extraction fallback.
    pub fn level_vocabulary(&self, level: Level) -> &'static HashSet<&'static str> {
        match level {
            Level::Cet4 => &word_lists::CET4_VOCABULARY,
            Level::Cet5 => &word_lists::CET5_VOCABULARY,
            Level::Cet6 => &word_lists::CET6_VOCABULARY,
            Level::N5 => &word_lists::N5_VOCABULARY,
            Level::N4 => &word_lists::N4_VOCABULARY,
            Level::N3 => &word_lists::N3_VOCABULARY,
            Level::N2 => &word_lists::N2_VOCABULARY,
            Level::N1 => &word_lists::N1_VOCABULARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_range_distance() {
        let range = TargetRange { min: 3.5, max: 5.0 };
        assert_eq!(range.distance(4.0), 0.0);
        assert!((range.distance(3.0) - 0.5).abs() < 1e-9);
        assert!((range.distance(6.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_level_has_targets() {
        let tables = LookupTables::new();
        for level in Level::CET {
            assert_eq!(tables.english_targets(level).level, level);
        }
        for level in Level::JLPT {
            assert_eq!(tables.japanese_targets(level).level, level);
        }
    }

    #[test]
    fn english_targets_increase_with_level() {
        let tables = LookupTables::new();
        assert!(
            tables.english_targets(Level::Cet4).complexity
                < tables.english_targets(Level::Cet6).complexity
        );
    }

    #[test]
    fn keyword_hits_are_language_keyed() {
        let tables = LookupTables::new();
        let text = "Practice this vocabulary lesson. 文法を勉強します。";
        assert!(tables.educational_hits(Language::English, text) >= 2);
        assert!(tables.educational_hits(Language::Japanese, text) >= 2);
        assert_eq!(tables.educational_hits(Language::Other, text), 0);
    }

    #[test]
    fn grammar_patterns_compile_for_both_languages() {
        let tables = LookupTables::new();
        assert!(!tables.grammar_patterns(Language::English).is_empty());
        assert!(!tables.grammar_patterns(Language::Japanese).is_empty());
        assert!(tables.grammar_patterns(Language::Other).is_empty());
    }
}
