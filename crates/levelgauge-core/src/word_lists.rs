//! Curated word lists for level grading and vocabulary extraction.
//!
//! Simple/advanced English indicator words, educational keywords, explanatory
//! markers, interactive phrases, per-level vocabulary sets, frequency lists,
//! and the meta-word stoplist used by the extractor.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Everyday words diagnostic of low-level (CET-4) English text.
pub static SIMPLE_ENGLISH_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "student", "school", "friend", "teacher", "family", "house", "home", "book", "water",
        "food", "morning", "night", "happy", "nice", "good", "big", "small", "new", "old", "easy",
        "eat", "drink", "go", "come", "see", "look", "like", "love", "play", "work", "study",
        "read", "write", "talk", "walk", "run", "help", "name", "day", "time", "year", "people",
        "cat", "dog", "together",
    ]
    .into_iter()
    .collect()
});

/// Academic words diagnostic of high-level (CET-6) English text.
pub static ADVANCED_ENGLISH_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "nevertheless",
        "consequently",
        "phenomenon",
        "hypothesis",
        "paradigm",
        "ambiguous",
        "intrinsic",
        "empirical",
        "synthesis",
        "methodology",
        "notwithstanding",
        "substantial",
        "preliminary",
        "comprehensive",
        "sophisticated",
        "abstraction",
        "implication",
        "facilitate",
        "subsequently",
        "predominantly",
        "discourse",
        "criterion",
        "divergent",
        "connotation",
        "contemplate",
        "erroneous",
        "analogous",
        "coherent",
        "arbitrary",
        "explicit",
    ]
    .into_iter()
    .collect()
});

/// English keywords that signal instructional intent.
pub static EDUCATIONAL_KEYWORDS_EN: &[&str] = &[
    "learn",
    "study",
    "practice",
    "example",
    "exercise",
    "grammar",
    "vocabulary",
    "definition",
    "meaning",
    "explain",
    "understand",
    "remember",
    "review",
    "lesson",
    "quiz",
    "translate",
    "pronunciation",
];

/// Japanese keywords that signal instructional intent.
pub static EDUCATIONAL_KEYWORDS_JA: &[&str] = &[
    "学ぶ",
    "勉強",
    "練習",
    "例",
    "文法",
    "単語",
    "意味",
    "説明",
    "理解",
    "覚える",
    "復習",
    "授業",
    "問題",
    "翻訳",
    "発音",
    "教科書",
];

/// English explanatory/causal connective phrases.
pub static EXPLANATORY_MARKERS_EN: &[&str] = &[
    "for example",
    "for instance",
    "in other words",
    "that is",
    "such as",
    "because",
    "therefore",
    "as a result",
    "this means",
    "which means",
];

/// Japanese explanatory/causal connective phrases.
pub static EXPLANATORY_MARKERS_JA: &[&str] = &[
    "例えば",
    "つまり",
    "なぜなら",
    "そのため",
    "ということ",
    "すなわち",
    "したがって",
    "このように",
];

/// English interactive/question phrasing.
pub static INTERACTIVE_PHRASES_EN: &[&str] = &[
    "do you",
    "can you",
    "let's",
    "try to",
    "what is",
    "how about",
    "have you",
    "imagine",
    "think about",
    "your turn",
];

/// Japanese interactive/question phrasing.
pub static INTERACTIVE_PHRASES_JA: &[&str] = &[
    "ましょう",
    "てみて",
    "でしょうか",
    "ですか",
    "ますか",
    "考えて",
    "どう思",
];

/// Words that describe vocabulary markup rather than vocabulary itself.
///
/// Extraction candidates matching this stoplist are rejected.
pub static META_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "example",
        "definition",
        "meaning",
        "word",
        "words",
        "vocabulary",
        "sentence",
        "translation",
        "grammar",
        "pronunciation",
        "reading",
        "noun",
        "verb",
        "adjective",
        "例",
        "意味",
        "単語",
        "語彙",
        "文",
        "翻訳",
        "文法",
        "発音",
        "読み",
        "名詞",
        "動詞",
        "形容詞",
    ]
    .into_iter()
    .collect()
});

/// CET-4 vocabulary sample used for the extraction fallback.
pub static CET4_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ability", "absent", "accept", "accident", "achieve", "advantage", "advice", "afraid",
        "agreement", "ancient", "annual", "anxious", "apologize", "appearance", "article",
        "attention", "attitude", "average", "behavior", "benefit", "brave", "calculate",
        "careful", "ceremony", "challenge", "character", "climate", "comfortable", "common",
        "communicate", "community", "compare", "complete", "condition", "confident", "courage",
        "culture", "curious", "custom", "damage",
    ]
    .into_iter()
    .collect()
});

/// CET-5 vocabulary sample used for the extraction fallback.
pub static CET5_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "abandon",
        "absolute",
        "abstract",
        "academic",
        "accelerate",
        "accompany",
        "accomplish",
        "accurate",
        "acknowledge",
        "acquire",
        "adequate",
        "adjust",
        "advocate",
        "aggregate",
        "allocate",
        "alternative",
        "analyze",
        "anticipate",
        "appropriate",
        "approximate",
        "assess",
        "assume",
        "attribute",
        "classify",
        "coincide",
        "compensate",
        "component",
        "comprise",
        "concept",
        "conduct",
        "consequence",
        "considerable",
        "constitute",
        "context",
        "contrast",
        "contribute",
        "conventional",
        "coordinate",
        "criteria",
        "derive",
    ]
    .into_iter()
    .collect()
});

/// CET-6 vocabulary sample used for the extraction fallback.
pub static CET6_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aberration",
        "abolish",
        "abridge",
        "accessory",
        "acclaim",
        "accord",
        "accountability",
        "acquisition",
        "adversity",
        "aesthetic",
        "affiliate",
        "aggravate",
        "alleviate",
        "ambiguity",
        "amend",
        "analogy",
        "anonymous",
        "apprehension",
        "articulate",
        "ascertain",
        "assertion",
        "assimilate",
        "augment",
        "austere",
        "authentic",
        "autonomy",
        "benevolent",
        "coherence",
        "commodity",
        "complement",
        "comprehensive",
        "conceive",
        "concurrent",
        "configuration",
        "connotation",
        "consolidate",
        "contemplate",
        "contingency",
        "controversy",
        "convergence",
    ]
    .into_iter()
    .collect()
});

/// JLPT N5 vocabulary sample used for the extraction fallback.
pub static N5_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "わたし",
        "がくせい",
        "せんせい",
        "ともだち",
        "がっこう",
        "ほん",
        "みず",
        "たべる",
        "のむ",
        "いく",
        "くる",
        "みる",
        "きく",
        "はなす",
        "よむ",
        "かく",
        "おおきい",
        "ちいさい",
        "あたらしい",
        "たのしい",
        "いえ",
        "ねこ",
        "いぬ",
        "あさ",
        "ばん",
        "学生",
        "先生",
        "学校",
        "友達",
        "毎日",
    ]
    .into_iter()
    .collect()
});

/// JLPT N4 vocabulary sample used for the extraction fallback.
pub static N4_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "経験",
        "説明",
        "準備",
        "予定",
        "会議",
        "文化",
        "習慣",
        "約束",
        "案内",
        "紹介",
        "都合",
        "遠慮",
        "規則",
        "故障",
        "関係",
        "世話",
        "支度",
        "連絡",
        "挨拶",
        "相談",
    ]
    .into_iter()
    .collect()
});

/// JLPT N3 vocabulary sample used for the extraction fallback.
pub static N3_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "環境",
        "影響",
        "状況",
        "情報",
        "技術",
        "経済",
        "政治",
        "制度",
        "調査",
        "能力",
        "課題",
        "解決",
        "発展",
        "提案",
        "検討",
        "対策",
        "活動",
        "資料",
        "効果",
        "目的",
    ]
    .into_iter()
    .collect()
});

/// JLPT N2 vocabulary sample used for the extraction fallback.
pub static N2_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "抽象",
        "概念",
        "把握",
        "妥当",
        "顕著",
        "矛盾",
        "促進",
        "抑制",
        "見解",
        "傾向",
        "考慮",
        "要因",
        "背景",
        "措置",
        "基盤",
        "構造",
        "認識",
        "評価",
        "維持",
        "貢献",
    ]
    .into_iter()
    .collect()
});

/// JLPT N1 vocabulary sample used for the extraction fallback.
pub static N1_VOCABULARY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "示唆",
        "逸脱",
        "慣習",
        "包括",
        "錯綜",
        "払拭",
        "脆弱",
        "変遷",
        "曖昧",
        "均衡",
        "洞察",
        "懸念",
        "偏見",
        "体裁",
        "顕在",
        "誘致",
        "是正",
        "網羅",
        "踏襲",
        "凌駕",
    ]
    .into_iter()
    .collect()
});

/// Most frequent English words, rank order.
///
/// The extraction fallback skips these: they are too common to be level
/// vocabulary worth surfacing.
pub static ENGLISH_COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
        "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "is", "are",
        "was", "were", "been", "has", "had", "am",
    ]
    .into_iter()
    .collect()
});

/// Most frequent Japanese words (particles, copulas, light verbs), rank order.
///
/// Shares the same fallback-skip role as [`ENGLISH_COMMON_WORDS`].
pub static JAPANESE_COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる",
        "も", "する", "から", "な", "こ", "として", "い", "や", "れる", "など", "ない", "この",
        "ため", "その", "よう", "また", "もの", "という", "まで", "なる", "へ", "か", "だ",
        "これ", "それ", "です", "ます", "ので", "とき", "へと",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_disjoint_where_it_matters() {
        for word in SIMPLE_ENGLISH_WORDS.iter() {
            assert!(
                !ADVANCED_ENGLISH_WORDS.contains(word),
                "{word} is both simple and advanced"
            );
        }
    }

    #[test]
    fn meta_words_cover_both_languages() {
        assert!(META_WORDS.contains("example"));
        assert!(META_WORDS.contains("意味"));
    }

    #[test]
    fn common_words_filter_glue() {
        assert!(ENGLISH_COMMON_WORDS.contains("the"));
        assert!(JAPANESE_COMMON_WORDS.contains("です"));
        assert!(!ENGLISH_COMMON_WORDS.contains("phenomenon"));
    }
}
