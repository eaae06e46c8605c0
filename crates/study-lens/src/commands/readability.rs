//! Readability command: reading-ease score and its interpretation.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use study_lens_core::readability;

use super::{InputArgs, check_min, paint_score};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum acceptable readability score (0–100).
    #[arg(long)]
    pub min: Option<f64>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.input.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min = ?args.min, "executing readability command");

    let content = args.input.read(max_input_bytes)?;
    let report = readability::readability_report(&content);
    let min = args.min.or(config_min);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            paint_score(report.score, &format!("{:.1}", report.score)),
            report.interpretation.level.bold(),
        );
        println!(
            "  {} sentences, {} words, {:.1} words/sentence, {:.1} chars/word",
            report.sentences, report.words, report.avg_sentence_length, report.avg_word_length,
        );
        println!("  {}", report.interpretation.description);
        println!("  {} {}", "Tip:".dimmed(), report.interpretation.recommendation);
    }

    check_min(args.input.label(), "readability", report.score, min)
}
