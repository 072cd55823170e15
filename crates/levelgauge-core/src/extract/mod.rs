//! Vocabulary extraction.
//!
//! An ordered cascade of regex strategies per language, each looking for
//! explicit word/definition/example markup of decreasing strictness. The
//! first strategy yielding at least one valid candidate wins; if none match
//! anywhere in the text, tokens are intersected against the level vocabulary
//! sets and definitions/readings are recovered from the surrounding context
//! where possible.

pub(crate) mod english;
pub(crate) mod japanese;

use std::collections::HashSet;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::{Content, Language, Level};
use crate::tables::LookupTables;
use crate::text;

/// A vocabulary entry extracted from content, tagged for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyItem {
    /// The extracted word.
    pub word: String,
    /// Kana reading; Japanese only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    /// Definition, when one could be extracted or recovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// An example sentence containing the word, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    /// Level tag carried over from the content.
    pub level: String,
    /// Language carried over from the content.
    pub language: Language,
    /// Source URL carried over from the content.
    pub source_url: String,
    /// Audio pronunciation URL; filled in by collaborators, never here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A candidate entry before validation and tagging.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) word: String,
    pub(crate) reading: Option<String>,
    pub(crate) definition: Option<String>,
    pub(crate) example: Option<String>,
}

/// One pattern in the extraction cascade.
///
/// Named capture groups `word`, `reading`, `definition`, and `example` map
/// directly onto [`Candidate`] fields; absent groups stay `None`.
pub(crate) struct ExtractionStrategy {
    pub(crate) name: &'static str,
    regex: Regex,
}

impl ExtractionStrategy {
    pub(crate) fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("valid regex"),
        }
    }

    /// All candidates this pattern finds in `text`, in match order.
    pub(crate) fn try_extract(&self, text: &str) -> Vec<Candidate> {
        let group = |caps: &regex::Captures<'_>, name: &str| {
            caps.name(name)
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
        };
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let word = group(&caps, "word")?;
                Some(Candidate {
                    word,
                    reading: group(&caps, "reading"),
                    definition: group(&caps, "definition"),
                    example: group(&caps, "example"),
                })
            })
            .collect()
    }
}

/// Extract up to `max_items` vocabulary entries from `content`.
pub(crate) fn extract_level_vocabulary(
    tables: &LookupTables,
    content: &Content,
    max_items: usize,
) -> Vec<VocabularyItem> {
    let combined = content.combined_text();

    let candidates = match content.language {
        Language::English => {
            let structured = run_cascade(english::strategies(), &combined, english::is_valid);
            if structured.is_empty() {
                english::fallback(tables, content, &combined)
            } else {
                structured
            }
        }
        Language::Japanese => {
            let structured = run_cascade(japanese::strategies(), &combined, japanese::is_valid);
            if structured.is_empty() {
                japanese::fallback(tables, content, &combined)
            } else {
                structured
            }
        }
        Language::Other => Vec::new(),
    };

    let level_tag = content
        .difficulty_level
        .clone()
        .unwrap_or_else(|| default_level_tag(content.language));
    let sentences = text::split_sentences(&combined);

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for candidate in candidates {
        if !seen.insert(candidate.word.clone()) {
            continue;
        }
        let example_sentence = candidate.example.or_else(|| {
            sentences
                .iter()
                .find(|s| s.contains(&candidate.word))
                .cloned()
        });
        items.push(VocabularyItem {
            word: candidate.word,
            reading: candidate.reading,
            definition: candidate.definition,
            example_sentence,
            level: level_tag.clone(),
            language: content.language,
            source_url: content.source_url.clone(),
            audio_url: None,
        });
        if items.len() == max_items {
            break;
        }
    }
    items
}

/// Walk strategies in priority order; the first with a valid candidate wins.
fn run_cascade(
    strategies: &[ExtractionStrategy],
    combined: &str,
    is_valid: fn(&Candidate) -> bool,
) -> Vec<Candidate> {
    for strategy in strategies {
        let valid: Vec<Candidate> = strategy
            .try_extract(combined)
            .into_iter()
            .filter(is_valid)
            .collect();
        if !valid.is_empty() {
            tracing::debug!(strategy = strategy.name, count = valid.len(), "strategy matched");
            return valid;
        }
    }
    Vec::new()
}

fn default_level_tag(language: Language) -> String {
    match language {
        Language::English => Level::Cet5.as_str().to_string(),
        Language::Japanese => Level::N3.as_str().to_string(),
        Language::Other => "intermediate".to_string(),
    }
}
