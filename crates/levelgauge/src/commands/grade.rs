//! Grade command — level assignment with confidence and recommendations.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use levelgauge_core::ContentGrader;

use super::{ContentArgs, read_input_file};

/// Arguments for the `grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Content description.
    #[command(flatten)]
    pub content: ContentArgs,
}

/// Grade a file against every level in its language family.
#[instrument(name = "cmd_grade", skip_all, fields(file = %args.content.file))]
pub fn cmd_grade(
    args: GradeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.content.file, language = ?args.content.language, "executing grade command");

    let body = read_input_file(&args.content.file, max_input_bytes)?;
    let content = args.content.to_content(body);

    let grader = ContentGrader::new();
    let result = grader.grade_content_level(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {} (confidence {:.2})",
        "Level:".bold(),
        result.assigned_level.green(),
        result.confidence_score,
    );
    for (level, score) in &result.level_scores {
        println!("  {level:<6} {score:.3}");
    }
    if !result.recommendations.is_empty() {
        println!("{}", "Recommendations:".bold());
        for recommendation in &result.recommendations {
            println!("  - {recommendation}");
        }
    }

    Ok(())
}
