//! Validate command — fitness of content for an arbitrary target level.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use levelgauge_core::ContentGrader;

use super::{ContentArgs, read_input_file};

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content description.
    #[command(flatten)]
    pub content: ContentArgs,

    /// Target level to validate against (e.g., CET-6, N2).
    #[arg(long)]
    pub target: String,
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    target: &'a str,
    fit: f64,
}

/// Score how well a file fits a target level.
#[instrument(name = "cmd_validate", skip_all, fields(file = %args.content.file, target = %args.target))]
pub fn cmd_validate(
    args: ValidateArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.content.file, target = %args.target, "executing validate command");

    let body = read_input_file(&args.content.file, max_input_bytes)?;
    let content = args.content.to_content(body);

    let grader = ContentGrader::new();
    let fit = grader.validate_level_appropriateness(&content, &args.target);

    if global_json {
        let report = ValidateReport {
            target: &args.target,
            fit,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if fit == 0.0 {
        println!("{} {} is outside this content's level family", "MISMATCH:".red(), args.target);
    } else {
        println!("{} fits {} at {fit:.3}", args.content.file, args.target.green());
    }

    Ok(())
}
