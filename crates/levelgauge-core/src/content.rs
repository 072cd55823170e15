//! Content records and the level taxonomies they are graded against.
//!
//! [`Content`] is the input to every grading and extraction call. It is owned
//! by the crawling collaborator and treated as immutable here. [`Level`]
//! models the two fixed proficiency taxonomies (CET-4/5/6 for English,
//! JLPT N5–N1 for Japanese); cross-family comparisons are always invalid.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of a content item.
///
/// Dispatch on this enum is exhaustive at every call site; anything that is
/// neither English nor Japanese takes the generic [`Language::Other`] path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English content, graded against CET-4/5/6.
    English,
    /// Japanese content, graded against JLPT N5–N1.
    Japanese,
    /// Unrecognized language; graded with fixed generic results.
    #[default]
    Other,
}

impl Language {
    /// Returns the language as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Other => "other",
        }
    }

    /// Parse a language tag. Unknown tags map to [`Language::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "english" | "en" => Self::English,
            "japanese" | "ja" | "jp" => Self::Japanese,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editorial type of a content item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentType {
    /// Long-form article.
    #[default]
    Article,
    /// News report.
    News,
    /// Conversational dialogue.
    Dialogue,
    /// Practice exercise.
    Exercise,
    /// Cultural background piece.
    Cultural,
    /// Audio transcript.
    Audio,
    /// Video transcript.
    Video,
}

impl ContentType {
    /// Returns the content type as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::News => "news",
            Self::Dialogue => "dialogue",
            Self::Exercise => "exercise",
            Self::Cultural => "cultural",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The level family a [`Level`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFamily {
    /// English CET levels.
    Cet,
    /// Japanese JLPT levels.
    Jlpt,
}

/// A proficiency level in one of the two fixed taxonomies.
///
/// Variants are ordered easiest-first within each family; [`Level::rank`]
/// exposes that ordering for the level-distance decay function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Level {
    /// CET-4, the entry English level.
    #[serde(rename = "CET-4")]
    Cet4,
    /// CET-5.
    #[serde(rename = "CET-5")]
    Cet5,
    /// CET-6, the most advanced English level.
    #[serde(rename = "CET-6")]
    Cet6,
    /// JLPT N5, the easiest Japanese level.
    N5,
    /// JLPT N4.
    N4,
    /// JLPT N3.
    N3,
    /// JLPT N2.
    N2,
    /// JLPT N1, the hardest Japanese level.
    N1,
}

/// Error returned when a level string matches neither taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct UnknownLevel(pub String);

impl Level {
    /// All CET levels, easiest first.
    pub const CET: [Self; 3] = [Self::Cet4, Self::Cet5, Self::Cet6];

    /// All JLPT levels, easiest first.
    pub const JLPT: [Self; 5] = [Self::N5, Self::N4, Self::N3, Self::N2, Self::N1];

    /// Canonical display form ("CET-4", "N5", ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cet4 => "CET-4",
            Self::Cet5 => "CET-5",
            Self::Cet6 => "CET-6",
            Self::N5 => "N5",
            Self::N4 => "N4",
            Self::N3 => "N3",
            Self::N2 => "N2",
            Self::N1 => "N1",
        }
    }

    /// The family this level belongs to.
    pub const fn family(&self) -> LevelFamily {
        match self {
            Self::Cet4 | Self::Cet5 | Self::Cet6 => LevelFamily::Cet,
            Self::N5 | Self::N4 | Self::N3 | Self::N2 | Self::N1 => LevelFamily::Jlpt,
        }
    }

    /// Zero-based position within the family ordering, easiest first.
    pub const fn rank(&self) -> usize {
        match self {
            Self::Cet4 | Self::N5 => 0,
            Self::Cet5 | Self::N4 => 1,
            Self::Cet6 | Self::N3 => 2,
            Self::N2 => 3,
            Self::N1 => 4,
        }
    }

    /// Parse a level string, returning `None` for anything outside the two
    /// taxonomies. Accepts "CET-4"/"cet4" and "N5"/"n5" spellings.
    pub fn parse(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect::<String>()
            .to_uppercase();
        match norm.as_str() {
            "CET4" => Some(Self::Cet4),
            "CET5" => Some(Self::Cet5),
            "CET6" => Some(Self::Cet6),
            "N5" => Some(Self::N5),
            "N4" => Some(Self::N4),
            "N3" => Some(Self::N3),
            "N2" => Some(Self::N2),
            "N1" => Some(Self::N1),
            _ => None,
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content item to grade, supplied already-fetched by the crawling layer.
///
/// Immutable once passed into the core; every computed type is a pure
/// derivation of a `Content` and the lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Content {
    /// Stable identifier assigned by the crawler.
    pub content_id: String,
    /// Title of the piece.
    pub title: String,
    /// Raw body text.
    pub body: String,
    /// Language of the piece.
    pub language: Language,
    /// Claimed difficulty level. May be absent or wrong; grading never
    /// trusts it beyond target-range selection.
    pub difficulty_level: Option<String>,
    /// Editorial type.
    pub content_type: ContentType,
    /// Where the piece came from.
    pub source_url: String,
    /// Free-form tags from the source.
    pub tags: Vec<String>,
}

impl Content {
    /// Title and body joined for whole-text analysis.
    pub fn combined_text(&self) -> String {
        if self.title.is_empty() {
            self.body.clone()
        } else {
            format!("{}\n{}", self.title, self.body)
        }
    }

    /// The claimed level, when it parses into a known taxonomy.
    pub fn claimed_level(&self) -> Option<Level> {
        self.difficulty_level.as_deref().and_then(Level::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_variants() {
        assert_eq!(Level::parse("CET-4"), Some(Level::Cet4));
        assert_eq!(Level::parse("cet6"), Some(Level::Cet6));
        assert_eq!(Level::parse("n1"), Some(Level::N1));
        assert_eq!(Level::parse("N3"), Some(Level::N3));
        assert_eq!(Level::parse("B2"), None);
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn level_families_are_exclusive() {
        for level in Level::CET {
            assert_eq!(level.family(), LevelFamily::Cet);
        }
        for level in Level::JLPT {
            assert_eq!(level.family(), LevelFamily::Jlpt);
        }
    }

    #[test]
    fn ranks_are_ordered_easiest_first() {
        assert_eq!(Level::Cet4.rank(), 0);
        assert_eq!(Level::Cet6.rank(), 2);
        assert_eq!(Level::N5.rank(), 0);
        assert_eq!(Level::N1.rank(), 4);
    }

    #[test]
    fn language_tag_fallback() {
        assert_eq!(Language::from_tag("English"), Language::English);
        assert_eq!(Language::from_tag("ja"), Language::Japanese);
        assert_eq!(Language::from_tag("klingon"), Language::Other);
    }

    #[test]
    fn claimed_level_ignores_garbage() {
        let content = Content {
            difficulty_level: Some("advanced".to_string()),
            ..Content::default()
        };
        assert_eq!(content.claimed_level(), None);
    }
}
