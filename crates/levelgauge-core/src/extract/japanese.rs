//! Japanese extraction strategies and fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::content::{Content, Level, LevelFamily};
use crate::tables::LookupTables;
use crate::text;
use crate::word_lists::{JAPANESE_COMMON_WORDS, META_WORDS};

use super::{Candidate, ExtractionStrategy};

const WORD: &str = r"[\p{Han}\p{Hiragana}\p{Katakana}ー]{1,12}";

/// Strategies in decreasing order of markup strictness.
static STRATEGIES: LazyLock<Vec<ExtractionStrategy>> = LazyLock::new(|| {
    vec![
        // 単語（よみ）：定義
        ExtractionStrategy::new(
            "word-reading-definition",
            &format!(
                r"(?P<word>{WORD})[（(](?P<reading>[\p{{Hiragana}}ー]{{1,12}})[）)]\s*[:：]\s*(?P<definition>[^\n。]{{2,}})"
            ),
        ),
        // 「単語」とは定義
        ExtractionStrategy::new(
            "towa definition",
            &format!(r"「?(?P<word>{WORD})」?とは[、]?\s*(?P<definition>[^\n。]{{2,}})"),
        ),
        // 単語：定義 (one per line)
        ExtractionStrategy::new(
            "word-definition line",
            &format!(r"(?m)^\s*(?P<word>{WORD})\s*[:：・\-–—]\s*(?P<definition>[^\n]{{2,}}?)\s*$"),
        ),
    ]
});

pub(crate) fn strategies() -> &'static [ExtractionStrategy] {
    &STRATEGIES
}

/// Japanese-script word, at least two characters or a single kanji, not
/// markup vocabulary, with a nontrivial definition when one was captured.
pub(crate) fn is_valid(candidate: &Candidate) -> bool {
    let word = candidate.word.as_str();
    let script = |c: char| text::is_hiragana(c) || text::is_katakana(c) || text::is_kanji(c) || c == 'ー';
    if word.is_empty() || !word.chars().all(script) {
        return false;
    }
    let char_count = word.chars().count();
    if char_count < 2 && !word.chars().next().is_some_and(text::is_kanji) {
        return false;
    }
    if META_WORDS.contains(word) {
        return false;
    }
    candidate
        .definition
        .as_deref()
        .is_none_or(|d| d.trim().chars().count() >= 2)
}

/// Set-intersection fallback over script-run tokens, with reading and
/// definition recovered from the surrounding context when possible.
pub(crate) fn fallback(tables: &LookupTables, content: &Content, combined: &str) -> Vec<Candidate> {
    let level = content
        .claimed_level()
        .filter(|l| l.family() == LevelFamily::Jlpt)
        .unwrap_or(Level::N3);
    let vocabulary = tables.level_vocabulary(level);

    let mut candidates = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for token in text::japanese_tokens(combined) {
        if JAPANESE_COMMON_WORDS.contains(token.as_str())
            || !vocabulary.contains(token.as_str())
            || !seen.insert(token.clone())
        {
            continue;
        }
        candidates.push(Candidate {
            reading: context_reading(combined, &token),
            definition: context_definition(combined, &token),
            example: None,
            word: token,
        });
    }
    candidates
}

/// Light-weight context pattern: 「<word>（よみ）」.
fn context_reading(combined: &str, word: &str) -> Option<String> {
    let pattern = format!(
        r"{}[（(]([\p{{Hiragana}}ー]{{1,12}})[）)]",
        regex::escape(word)
    );
    Regex::new(&pattern)
        .ok()?
        .captures(combined)
        .map(|caps| caps[1].to_string())
}

/// Light-weight context pattern: 「<word>とは…」.
fn context_definition(combined: &str, word: &str) -> Option<String> {
    let pattern = format!(r"{}とは[、]?\s*([^\n。]{{2,}})", regex::escape(word));
    Regex::new(&pattern)
        .ok()?
        .captures(combined)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Language;

    #[test]
    fn reading_strategy_captures_all_fields() {
        let text = "学生（がくせい）：学校で勉強する人のこと。";
        let candidates = strategies()[0].try_extract(text);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word, "学生");
        assert_eq!(candidates[0].reading.as_deref(), Some("がくせい"));
        assert!(candidates[0].definition.as_deref().is_some_and(|d| d.contains("学校")));
    }

    #[test]
    fn towa_strategy_extracts_word() {
        let text = "「文化」とは、人々の生活様式のことです。";
        let candidates = strategies()[1].try_extract(text);
        assert_eq!(candidates[0].word, "文化");
        assert!(candidates[0].definition.is_some());
    }

    #[test]
    fn meta_words_are_rejected() {
        let candidate = Candidate {
            word: "意味".to_string(),
            reading: None,
            definition: Some("ことばの内容".to_string()),
            example: None,
        };
        assert!(!is_valid(&candidate));
    }

    #[test]
    fn single_kanji_is_valid_but_single_kana_is_not() {
        let kanji = Candidate {
            word: "犬".to_string(),
            reading: None,
            definition: None,
            example: None,
        };
        let kana = Candidate {
            word: "あ".to_string(),
            reading: None,
            definition: None,
            example: None,
        };
        assert!(is_valid(&kanji));
        assert!(!is_valid(&kana));
    }

    #[test]
    fn latin_words_are_rejected() {
        let candidate = Candidate {
            word: "word".to_string(),
            reading: None,
            definition: None,
            example: None,
        };
        assert!(!is_valid(&candidate));
    }

    #[test]
    fn fallback_intersects_level_vocabulary() {
        let content = Content {
            body: "環境への影響と技術の発展について調査した。".to_string(),
            language: Language::Japanese,
            difficulty_level: Some("N3".to_string()),
            ..Content::default()
        };
        let candidates = fallback(&LookupTables::new(), &content, &content.body);
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert!(words.contains(&"環境"));
        assert!(words.contains(&"影響"));
        assert!(words.contains(&"技術"));
    }

    #[test]
    fn fallback_recovers_reading_from_context() {
        let content = Content {
            body: "環境（かんきょう）を守ることが大切です。".to_string(),
            language: Language::Japanese,
            difficulty_level: Some("N3".to_string()),
            ..Content::default()
        };
        let candidates = fallback(&LookupTables::new(), &content, &content.body);
        let env = candidates.iter().find(|c| c.word == "環境").expect("環境");
        assert_eq!(env.reading.as_deref(), Some("かんきょう"));
    }
}
