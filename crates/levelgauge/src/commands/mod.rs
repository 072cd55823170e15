//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use levelgauge_core::{Content, ContentType, Language};

pub mod grade;
pub mod metrics;
pub mod validate;
pub mod vocab;

/// Read a file and validate its size against the configured limit.
///
/// Checks the size via metadata before reading the file into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Shared flags describing the content being analyzed.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// File containing the content body.
    pub file: Utf8PathBuf,

    /// Language of the content.
    #[arg(long, value_enum, default_value_t = Language::English)]
    pub language: Language,

    /// Title of the content.
    #[arg(long)]
    pub title: Option<String>,

    /// Claimed difficulty level (e.g., CET-4, N5).
    #[arg(long)]
    pub level: Option<String>,

    /// Editorial content type.
    #[arg(long, value_enum, default_value_t = ContentType::Article)]
    pub content_type: ContentType,

    /// Source URL recorded on extracted vocabulary.
    #[arg(long, default_value = "")]
    pub source_url: String,
}

impl ContentArgs {
    /// Build a [`Content`] record from the flags and the file body.
    pub fn to_content(&self, body: String) -> Content {
        Content {
            content_id: self
                .file
                .file_stem()
                .unwrap_or("content")
                .to_string(),
            title: self.title.clone().unwrap_or_default(),
            body,
            language: self.language,
            difficulty_level: self.level.clone(),
            content_type: self.content_type,
            source_url: self.source_url.clone(),
            tags: Vec::new(),
        }
    }
}
