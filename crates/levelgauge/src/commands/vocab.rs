//! Vocab command — level vocabulary extraction.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use levelgauge_core::{Config, ContentGrader};

use super::{ContentArgs, read_input_file};

/// Arguments for the `vocab` subcommand.
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Content description.
    #[command(flatten)]
    pub content: ContentArgs,
}

/// Extract vocabulary items from a file.
#[instrument(name = "cmd_vocab", skip_all, fields(file = %args.content.file))]
pub fn cmd_vocab(
    args: VocabArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.content.file, "executing vocab command");

    let body = read_input_file(&args.content.file, max_input_bytes)?;
    let content = args.content.to_content(body);

    let grader = ContentGrader::from_config(config);
    let items = grader.extract_level_vocabulary(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("no vocabulary found");
        return Ok(());
    }
    for item in &items {
        match (&item.reading, &item.definition) {
            (Some(reading), Some(definition)) => {
                println!("{} ({reading}) — {definition}", item.word.bold());
            }
            (None, Some(definition)) => println!("{} — {definition}", item.word.bold()),
            (Some(reading), None) => println!("{} ({reading})", item.word.bold()),
            (None, None) => println!("{}", item.word.bold()),
        }
    }

    Ok(())
}
