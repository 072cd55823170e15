//! Metrics command — the eight quality sub-metrics.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use levelgauge_core::ContentGrader;

use super::{ContentArgs, read_input_file};

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Content description.
    #[command(flatten)]
    pub content: ContentArgs,
}

/// Compute quality metrics for a file.
#[instrument(name = "cmd_metrics", skip_all, fields(file = %args.content.file))]
pub fn cmd_metrics(
    args: MetricsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.content.file, "executing metrics command");

    let body = read_input_file(&args.content.file, max_input_bytes)?;
    let content = args.content.to_content(body);

    let grader = ContentGrader::new();
    let metrics = grader.compute_metrics(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("{}", "Quality metrics:".bold());
    for (name, value) in [
        ("vocabulary_appropriateness", metrics.vocabulary_appropriateness),
        ("grammar_complexity", metrics.grammar_complexity),
        ("content_structure", metrics.content_structure),
        ("educational_value", metrics.educational_value),
        ("authenticity", metrics.authenticity),
        ("cultural_relevance", metrics.cultural_relevance),
        ("readability", metrics.readability),
        ("engagement_factor", metrics.engagement_factor),
    ] {
        println!("  {name:<26} {value:.3}");
    }

    Ok(())
}
