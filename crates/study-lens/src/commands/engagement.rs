//! Engagement command.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use study_lens_core::analysis;

use super::{InputArgs, check_min, paint_score};

/// Arguments for the `engagement` subcommand.
#[derive(Args, Debug)]
pub struct EngagementArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum acceptable engagement score (0–100).
    #[arg(long)]
    pub min: Option<i32>,
}

/// Score how engaging a file is.
#[instrument(name = "cmd_engagement", skip_all, fields(file = %args.input.file))]
pub fn cmd_engagement(
    args: EngagementArgs,
    global_json: bool,
    config_min: Option<i32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min = ?args.min, "executing engagement command");

    let content = args.input.read(max_input_bytes)?;
    let report = analysis::engagement_report(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}/100",
            paint_score(f64::from(report.score), &report.score.to_string())
        );
        if !report.engaging_words.is_empty() {
            println!(
                "  {} {}",
                "Engaging words:".dimmed(),
                report.engaging_words.join(", ")
            );
        }
        println!(
            "  {} {}, {} {}, {} {}",
            "Examples:".dimmed(),
            if report.has_examples { "yes" } else { "no" },
            "Questions:".dimmed(),
            report.question_marks,
            "Bullets:".dimmed(),
            report.bullet_lines,
        );
        if report.long_sentence_penalty {
            println!(
                "  {} {:.1} words per sentence",
                "Long sentences:".yellow(),
                report.avg_fragment_words
            );
        }
    }

    check_min(
        args.input.label(),
        "engagement",
        report.score,
        args.min.or(config_min),
    )
}
