//! Core grading library for levelgauge.
//!
//! Grades free-text learning material into one of two fixed proficiency
//! taxonomies — English CET-4/5/6 or Japanese JLPT N5–N1 — and extracts
//! level vocabulary from the same text. All signals are deterministic,
//! rule-based heuristics over surface features; there is no network access,
//! no persistence, and no shared mutable state, so a single
//! [`ContentGrader`] can serve arbitrarily many concurrent calls.
//!
//! # Modules
//!
//! - [`content`] - Input records and level taxonomies
//! - [`grading`] - Level grading and appropriateness validation
//! - [`metrics`] - The eight quality sub-metrics
//! - [`extract`] - Vocabulary extraction cascade
//! - [`score`] - Aggregate quality scoring
//! - [`tables`] - Immutable lookup tables
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use levelgauge_core::{Content, ContentGrader, Language};
//!
//! let grader = ContentGrader::new();
//! let content = Content {
//!     body: "I am a student. I go to school.".to_string(),
//!     language: Language::English,
//!     ..Content::default()
//! };
//! let result = grader.grade_content_level(&content);
//! assert!(result.confidence_score >= 0.3);
//! assert_eq!(result.level_scores.len(), 3);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod grading;
pub mod metrics;
pub mod score;
pub mod tables;
pub mod text;
pub mod word_lists;

mod recommend;

pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use content::{Content, ContentType, Language, Level, LevelFamily, UnknownLevel};
pub use error::{ConfigError, ConfigResult};
pub use extract::VocabularyItem;
pub use grading::{CONFIDENCE_FLOOR, ContentGrader, LevelGradingResult};
pub use metrics::QualityMetrics;
pub use score::{QualityScore, SourceSignals};
pub use tables::LookupTables;

/// Clamp a heuristic score into [0.0, 1.0].
///
/// Every heuristic output is advisory and clamped at the boundary rather
/// than validated or rejected.
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
