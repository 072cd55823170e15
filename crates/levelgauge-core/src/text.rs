//! Text segmentation utilities.
//!
//! Sentence splitting, word extraction, paragraph splitting, and Japanese
//! script classification for use by the metrics, grading, and extraction
//! modules. English sentence boundaries are detected with abbreviation,
//! decimal, and URL awareness; Japanese terminators (。！？) are always
//! treated as boundaries.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Common abbreviations that end in a period without ending a sentence.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "vs", "etc", "approx", "dept", "est",
        "fig", "vol", "no", "inc", "ltd", "co", "corp", "e.g", "i.e",
    ]
    .into_iter()
    .collect()
});

/// Split text into sentences.
///
/// `!` and `?` boundaries are confirmed by the capitalization of the next
/// character; `.` boundaries apply abbreviation, decimal, and URL heuristics.
/// Japanese terminators are unconditional boundaries.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        let boundary = if is_cjk_terminator(ch) {
            true
        } else if is_sentence_terminator(ch) {
            is_sentence_boundary(&chars, i, &current)
        } else {
            false
        };

        if boundary {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    // Drop stray punctuation fragments
    if sentence.chars().count() >= 2 {
        sentences.push(sentence.to_string());
    }
}

/// Extract words from text, splitting on whitespace and stripping punctuation.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_cjk_terminator(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？')
}

fn is_sentence_boundary(chars: &[char], pos: usize, current: &str) -> bool {
    if pos == chars.len() - 1 {
        return true;
    }

    let next_char = next_non_space(chars, pos);

    // ! and ? are almost always boundaries
    if chars[pos] == '!' || chars[pos] == '?' {
        return next_char.is_none_or(|c| !c.is_lowercase());
    }

    // Period heuristics
    let before = word_before(chars, pos);
    if is_likely_abbreviation(&before) || is_likely_initial(&before) {
        return false;
    }
    if ends_with_decimal(current) || ends_with_url(current) || current.ends_with("...") {
        return false;
    }
    if let Some(next) = next_char
        && next.is_ascii_digit()
        && before.chars().last().is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    match next_char {
        Some(c) if c.is_lowercase() => false,
        _ => true,
    }
}

fn next_non_space(chars: &[char], pos: usize) -> Option<char> {
    chars[pos + 1..].iter().find(|c| !c.is_whitespace()).copied()
}

fn word_before(chars: &[char], pos: usize) -> String {
    let mut end = pos;
    while end > 0 && (chars[end - 1].is_whitespace() || chars[end - 1] == '.') {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '.') {
        start -= 1;
    }
    chars[start..end].iter().collect()
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let clean = word.trim_end_matches('.').to_lowercase();
    ABBREVIATIONS.contains(clean.as_str())
        || (clean.chars().count() == 1 && word.chars().next().is_some_and(char::is_uppercase))
}

fn is_likely_initial(word: &str) -> bool {
    // J.K., U.S.A. style runs
    word.contains('.') && word.chars().filter(char::is_ascii_uppercase).count() >= 1
        && word
            .chars()
            .all(|c| c == '.' || c.is_ascii_uppercase())
}

fn ends_with_decimal(sentence: &str) -> bool {
    let tail: String = tail_chars(sentence, 10);
    DECIMAL_PATTERN.is_match(&tail)
}

fn ends_with_url(sentence: &str) -> bool {
    let tail: String = tail_chars(sentence, 50);
    URL_PATTERN.is_match(&tail)
}

fn tail_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

// -- Japanese script classification -----------------------------------------

/// Is `c` a hiragana character?
pub const fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

/// Is `c` a katakana character (including the prolonged sound mark)?
pub const fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

/// Is `c` a kanji (CJK unified ideograph)?
pub const fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

/// Character counts per Japanese script class.
///
/// `total` counts only Japanese script characters; ratios are relative to
/// that total, so Latin text and punctuation never dilute them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptProfile {
    /// Hiragana character count.
    pub hiragana: usize,
    /// Katakana character count.
    pub katakana: usize,
    /// Kanji character count.
    pub kanji: usize,
    /// Total Japanese script characters.
    pub total: usize,
}

impl ScriptProfile {
    /// Hiragana share of Japanese script characters, 0.0 for empty text.
    pub fn hiragana_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hiragana as f64 / self.total as f64
        }
    }

    /// Kanji share of Japanese script characters, 0.0 for empty text.
    pub fn kanji_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.kanji as f64 / self.total as f64
        }
    }
}

/// Count Japanese script characters in `text`.
pub fn script_profile(text: &str) -> ScriptProfile {
    let mut profile = ScriptProfile::default();
    for c in text.chars() {
        if is_hiragana(c) {
            profile.hiragana += 1;
        } else if is_katakana(c) {
            profile.katakana += 1;
        } else if is_kanji(c) {
            profile.kanji += 1;
        } else {
            continue;
        }
        profile.total += 1;
    }
    profile
}

/// Tokenize Japanese text into maximal runs of a single script class.
///
/// A crude but deterministic stand-in for morphological analysis: runs of
/// kanji, hiragana, or katakana become separate tokens, which is enough for
/// set-intersection against level vocabulary.
pub fn japanese_tokens(text: &str) -> Vec<String> {
    #[derive(PartialEq, Clone, Copy)]
    enum Class {
        Hira,
        Kata,
        Kanji,
    }

    fn classify(c: char) -> Option<Class> {
        if is_hiragana(c) {
            Some(Class::Hira)
        } else if is_katakana(c) {
            Some(Class::Kata)
        } else if is_kanji(c) {
            Some(Class::Kanji)
        } else {
            None
        }
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_class: Option<Class> = None;

    for c in text.chars() {
        let class = classify(c);
        match (class, current_class) {
            (Some(cls), Some(prev)) if cls == prev => current.push(c),
            (Some(cls), _) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(c);
                current_class = Some(cls);
            }
            (None, _) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                current_class = None;
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn japanese_terminators_split() {
        let sentences = split_sentences("わたしは学生です。毎日学校へ行きます。楽しい！");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn script_profile_ratios() {
        let profile = script_profile("日本語のテスト");
        assert_eq!(profile.kanji, 3);
        assert_eq!(profile.hiragana, 1);
        assert_eq!(profile.katakana, 3);
        assert!((profile.kanji_ratio() - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn script_profile_empty_is_zero() {
        let profile = script_profile("plain ascii only");
        assert_eq!(profile.total, 0);
        assert_eq!(profile.kanji_ratio(), 0.0);
        assert_eq!(profile.hiragana_ratio(), 0.0);
    }

    #[test]
    fn japanese_tokens_split_on_script() {
        let tokens = japanese_tokens("私は学生です");
        assert_eq!(tokens, vec!["私", "は", "学生", "です"]);
    }
}
